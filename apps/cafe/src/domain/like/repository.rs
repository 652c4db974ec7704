use super::entity::Like;
use crate::domain::{cafe::entity::Cafe, errors::DomainError};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn exists(&self, user_id: i32, cafe_id: i32) -> Result<bool, DomainError>;
    /// Inserts the like; a second insert for the same pair fails with
    /// `DomainError::UniqueViolation`.
    async fn create(&self, user_id: i32, cafe_id: i32) -> Result<Like, DomainError>;
    /// Returns whether a row was removed.
    async fn delete(&self, user_id: i32, cafe_id: i32) -> Result<bool, DomainError>;
    async fn liked_cafes(&self, user_id: i32) -> Result<Vec<Cafe>, DomainError>;
}
