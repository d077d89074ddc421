use crate::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{operation}` is not allowed while in step {step}")]
    InvalidOperation {
        operation: &'static str,
        step: String,
    },

    #[error("dish `{dish_id}` is not on the {category} menu")]
    UnknownDish { category: Category, dish_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! invalid {
    ($operation:expr, $step:expr $(,)?) => {
        return Err($crate::Error::InvalidOperation {
            operation: $operation,
            step: $step.to_string(),
        })
    };
}
