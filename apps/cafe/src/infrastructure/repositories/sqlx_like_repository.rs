use crate::domain::{
    cafe::entity::Cafe,
    errors::DomainError,
    like::{entity::Like, repository::LikeRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::map_db_error;

pub struct SqlxLikeRepository {
    pub pool: PgPool,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: i32, cafe_id: i32) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND cafe_id = $2)",
        )
        .bind(user_id)
        .bind(cafe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    // Plain insert: the primary key on (user_id, cafe_id) rejects duplicates.
    #[instrument(skip(self))]
    async fn create(&self, user_id: i32, cafe_id: i32) -> Result<Like, DomainError> {
        let like = sqlx::query_as::<_, Like>(
            "INSERT INTO likes (user_id, cafe_id) VALUES ($1, $2) RETURNING user_id, cafe_id",
        )
        .bind(user_id)
        .bind(cafe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;
        debug!("like stored");
        Ok(like)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: i32, cafe_id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND cafe_id = $2")
            .bind(user_id)
            .bind(cafe_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn liked_cafes(&self, user_id: i32) -> Result<Vec<Cafe>, DomainError> {
        sqlx::query_as::<_, Cafe>(
            "SELECT c.id, c.name, c.description, c.url, c.address, c.city_code, c.image_url \
             FROM cafes c \
             JOIN likes l ON l.cafe_id = c.id \
             WHERE l.user_id = $1 \
             ORDER BY c.name, c.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
