use mealcart_shared::Category;

use crate::WizardStep;

/// Result of a user intent that the wizard accepted as well-formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Advanced(WizardStep),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_advanced(&self) -> bool {
        matches!(self, Outcome::Advanced(_))
    }
}

/// Why a transition was blocked. The step and collected data are unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("username is required")]
    MissingUsername,

    #[error("password is required")]
    MissingPassword,

    #[error("family size must be a whole number of at least 1")]
    InvalidFamilySize,

    #[error("pick at least one {0} dish to continue")]
    EmptySelection(Category),
}
