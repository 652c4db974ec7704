use crate::domain::{
    cafe::{
        entity::{Cafe, CafeDetail, CafeFields},
        repository::CafeRepository,
    },
    errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use super::map_db_error;

const CAFE_COLUMNS: &str = "id, name, description, url, address, city_code, image_url";

pub struct SqlxCafeRepository {
    pub pool: PgPool,
}

impl SqlxCafeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeRepository for SqlxCafeRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Cafe>, DomainError> {
        let cafes = sqlx::query_as::<_, Cafe>(&format!(
            "SELECT {} FROM cafes ORDER BY name, id",
            CAFE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;
        debug!(count = cafes.len(), "listed cafes");
        Ok(cafes)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<Cafe>, DomainError> {
        sqlx::query_as::<_, Cafe>(&format!("SELECT {} FROM cafes WHERE id = $1", CAFE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_detail(&self, id: i32) -> Result<Option<CafeDetail>, DomainError> {
        sqlx::query_as::<_, CafeDetail>(
            "SELECT c.id, c.name, c.description, c.url, c.address, c.city_code, c.image_url, \
                    ci.name AS city_name, ci.state AS city_state \
             FROM cafes c \
             JOIN cities ci ON ci.code = c.city_code \
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, fields), fields(name = %fields.name, city_code = %fields.city_code))]
    async fn create(&self, fields: &CafeFields) -> Result<Cafe, DomainError> {
        let cafe = sqlx::query_as::<_, Cafe>(&format!(
            "INSERT INTO cafes (name, description, url, address, city_code, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {}",
            CAFE_COLUMNS
        ))
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.url)
        .bind(&fields.address)
        .bind(&fields.city_code)
        .bind(&fields.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;
        info!(cafe_id = cafe.id, "cafe created");
        Ok(cafe)
    }

    #[instrument(skip(self, fields), fields(name = %fields.name))]
    async fn update(&self, id: i32, fields: &CafeFields) -> Result<Cafe, DomainError> {
        let cafe = sqlx::query_as::<_, Cafe>(&format!(
            "UPDATE cafes \
             SET name = $2, description = $3, url = $4, address = $5, city_code = $6, image_url = $7 \
             WHERE id = $1 \
             RETURNING {}",
            CAFE_COLUMNS
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.url)
        .bind(&fields.address)
        .bind(&fields.city_code)
        .bind(&fields.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| DomainError::NotFound(format!("cafe {}", id)))?;
        info!(cafe_id = cafe.id, "cafe updated");
        Ok(cafe)
    }
}
