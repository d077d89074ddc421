use mealcart_shared::FamilySize;
use validator::Validate;

use crate::Rejection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    username: String,
    family_size: FamilySize,
}

impl User {
    pub fn new(username: impl Into<String>, family_size: FamilySize) -> Self {
        Self {
            username: username.into(),
            family_size,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn family_size(&self) -> FamilySize {
        self.family_size
    }
}

/// Raw sign-in form fields. The password is required but never checked.
#[derive(Validate, Clone, Default)]
pub struct SignInInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub family_size: String,
}

impl SignInInput {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        family_size: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            family_size: family_size.into(),
        }
    }

    /// The user this form describes, or the first field that blocks sign-in.
    pub(crate) fn into_user(self) -> Result<User, Rejection> {
        if let Err(errors) = self.validate() {
            if errors.field_errors().contains_key("username") {
                return Err(Rejection::MissingUsername);
            }

            return Err(Rejection::MissingPassword);
        }

        let Some(family_size) = FamilySize::parse(&self.family_size) else {
            return Err(Rejection::InvalidFamilySize);
        };

        Ok(User::new(self.username, family_size))
    }
}
