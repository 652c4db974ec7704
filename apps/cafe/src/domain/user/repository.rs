use super::entity::{NewUser, ProfileFields, User};
use crate::domain::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DomainError::UniqueViolation` when the username is taken.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn update_profile(&self, id: i32, fields: &ProfileFields) -> Result<User, DomainError>;
}
