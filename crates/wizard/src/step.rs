use mealcart_shared::Category;
use serde::Serialize;
use std::fmt;

const LABELS: [&str; 6] = ["Sign in", "Welcome", "Meals", "Dishes", "Confirm", "Shopping"];

/// The screen the user is on. `DishPick` carries the category being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "category", rename_all = "snake_case")]
pub enum WizardStep {
    SignIn,
    Welcome,
    CategoryPick,
    DishPick(Category),
    Confirm,
    ShoppingList,
}

impl WizardStep {
    fn position(self) -> usize {
        match self {
            WizardStep::SignIn => 0,
            WizardStep::Welcome => 1,
            WizardStep::CategoryPick => 2,
            WizardStep::DishPick(_) => 3,
            WizardStep::Confirm => 4,
            WizardStep::ShoppingList => 5,
        }
    }

    /// Short title for a progress indicator.
    pub fn label(self) -> &'static str {
        LABELS[self.position()]
    }

    /// Zero-based position of this step and the total number of steps.
    pub fn progress(self) -> (usize, usize) {
        (self.position(), LABELS.len())
    }

    pub fn category(self) -> Option<Category> {
        match self {
            WizardStep::DishPick(category) => Some(category),
            _ => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::SignIn => f.write_str("sign-in"),
            WizardStep::Welcome => f.write_str("welcome"),
            WizardStep::CategoryPick => f.write_str("category-pick"),
            WizardStep::DishPick(category) => write!(f, "dish-pick({category})"),
            WizardStep::Confirm => f.write_str("confirm"),
            WizardStep::ShoppingList => f.write_str("shopping-list"),
        }
    }
}
