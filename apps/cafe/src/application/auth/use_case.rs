use super::dto::{LoginForm, SignupForm};
use crate::domain::{
    errors::{DomainError, FieldErrors},
    user::{
        entity::{DEFAULT_USER_IMAGE_URL, NewUser, User},
        repository::UserRepository,
    },
};
use crate::infrastructure::security::password::{hash_password, verify_password};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

pub const USERNAME_TAKEN_MSG: &str = "Username already taken";

pub struct AuthUseCase {
    users: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl AuthUseCase {
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// Creates the account with a bcrypt-hashed password. A taken username is
    /// reported as a validation failure on the `username` field.
    pub async fn register(&self, form: SignupForm) -> Result<User, DomainError> {
        form.validate().map_err(|e| DomainError::Invalid(e.into()))?;

        let new_user = NewUser {
            hashed_password: hash_password(&form.password, self.bcrypt_cost).await?,
            username: form.username,
            email: form.email,
            first_name: form.first_name,
            last_name: form.last_name,
            description: form.description,
            image_url: form
                .image_url
                .unwrap_or_else(|| DEFAULT_USER_IMAGE_URL.to_string()),
        };

        match self.users.create(&new_user).await {
            Err(DomainError::UniqueViolation(constraint)) => {
                info!(username = %new_user.username, %constraint, "signup rejected, username taken");
                let mut errors = FieldErrors::new();
                errors.add("username", USERNAME_TAKEN_MSG);
                Err(DomainError::Invalid(errors))
            }
            other => other,
        }
    }

    /// Returns the user only when `password` matches the stored hash.
    pub async fn authenticate(&self, form: &LoginForm) -> Result<Option<User>, DomainError> {
        form.validate().map_err(|e| DomainError::Invalid(e.into()))?;

        let Some(user) = self.users.find_by_username(&form.username).await? else {
            warn!(username = %form.username, "login for unknown user");
            return Ok(None);
        };

        if verify_password(&form.password, &user.hashed_password).await {
            Ok(Some(user))
        } else {
            warn!(username = %form.username, "login with wrong password");
            Ok(None)
        }
    }
}
