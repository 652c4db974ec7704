use super::entity::City;
use crate::domain::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<City>, DomainError>;
    /// All cities ordered by name.
    async fn find_all(&self) -> Result<Vec<City>, DomainError>;
}
