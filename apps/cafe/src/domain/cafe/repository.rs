use super::entity::{Cafe, CafeDetail, CafeFields};
use crate::domain::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CafeRepository: Send + Sync {
    /// All cafes ordered by name.
    async fn find_all(&self) -> Result<Vec<Cafe>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Cafe>, DomainError>;
    async fn find_detail(&self, id: i32) -> Result<Option<CafeDetail>, DomainError>;
    async fn create(&self, fields: &CafeFields) -> Result<Cafe, DomainError>;
    /// Overwrites the editable columns of cafe `id`; `NotFound` when no such row.
    async fn update(&self, id: i32, fields: &CafeFields) -> Result<Cafe, DomainError>;
}
