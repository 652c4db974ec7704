use crate::domain::{
    errors::DomainError,
    user::{
        entity::{NewUser, ProfileFields, User},
        repository::UserRepository,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use super::map_db_error;

const USER_COLUMNS: &str =
    "id, username, email, first_name, last_name, description, image_url, hashed_password";

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, first_name, last_name, description, image_url, hashed_password) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.description)
        .bind(&user.image_url)
        .bind(&user.hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;
        info!(user_id = created.id, "user registered");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE username = $1",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, fields))]
    async fn update_profile(&self, id: i32, fields: &ProfileFields) -> Result<User, DomainError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users \
             SET email = $2, first_name = $3, last_name = $4, description = $5, image_url = $6 \
             WHERE id = $1 \
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .bind(&fields.email)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.description)
        .bind(&fields.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| DomainError::NotFound(format!("user {}", id)))
    }
}
