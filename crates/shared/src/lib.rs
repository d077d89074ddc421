mod catalog;
mod error;
mod selection;
mod value_object;

pub use catalog::*;
pub use error::*;
pub use selection::*;
pub use value_object::*;
