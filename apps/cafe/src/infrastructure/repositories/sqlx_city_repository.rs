use crate::domain::{
    city::{entity::City, repository::CityRepository},
    errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use super::map_db_error;

pub struct SqlxCityRepository {
    pub pool: PgPool,
}

impl SqlxCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> Result<Option<City>, DomainError> {
        sqlx::query_as::<_, City>("SELECT code, name, state FROM cities WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        sqlx::query_as::<_, City>("SELECT code, name, state FROM cities ORDER BY name, code")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
