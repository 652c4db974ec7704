use crate::{
    application::{
        auth::use_case::AuthUseCase, cafes::use_case::CafeUseCase, likes::use_case::LikeUseCase,
        profile::use_case::ProfileUseCase,
    },
    config::Config,
    domain::{
        cafe::repository::CafeRepository, city::repository::CityRepository,
        like::repository::LikeRepository, user::repository::UserRepository,
    },
    infrastructure::repositories::{
        sqlx_cafe_repository::SqlxCafeRepository, sqlx_city_repository::SqlxCityRepository,
        sqlx_like_repository::SqlxLikeRepository, sqlx_user_repository::SqlxUserRepository,
    },
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub city_repo: Arc<dyn CityRepository>,
    pub cafe_repo: Arc<dyn CafeRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub like_repo: Arc<dyn LikeRepository>,
}

impl AppState {
    /// Wires the Postgres-backed repositories onto one pool.
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            city_repo: Arc::new(SqlxCityRepository::new(db.clone())),
            cafe_repo: Arc::new(SqlxCafeRepository::new(db.clone())),
            user_repo: Arc::new(SqlxUserRepository::new(db.clone())),
            like_repo: Arc::new(SqlxLikeRepository::new(db.clone())),
            db,
            config,
        }
    }

    pub fn cafes(&self) -> CafeUseCase {
        CafeUseCase::new(self.cafe_repo.clone(), self.city_repo.clone())
    }

    pub fn auth(&self) -> AuthUseCase {
        AuthUseCase::new(self.user_repo.clone(), self.config.bcrypt_cost)
    }

    pub fn profiles(&self) -> ProfileUseCase {
        ProfileUseCase::new(self.user_repo.clone(), self.like_repo.clone())
    }

    pub fn likes(&self) -> LikeUseCase {
        LikeUseCase::new(self.like_repo.clone(), self.cafe_repo.clone())
    }
}
