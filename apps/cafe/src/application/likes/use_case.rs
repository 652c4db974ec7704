use crate::domain::{
    cafe::repository::CafeRepository, errors::DomainError, like::entity::Like,
    like::repository::LikeRepository,
};
use std::sync::Arc;
use tracing::info;

pub struct LikeUseCase {
    likes: Arc<dyn LikeRepository>,
    cafes: Arc<dyn CafeRepository>,
}

impl LikeUseCase {
    pub fn new(likes: Arc<dyn LikeRepository>, cafes: Arc<dyn CafeRepository>) -> Self {
        Self { likes, cafes }
    }

    pub async fn likes(&self, user_id: i32, cafe_id: i32) -> Result<bool, DomainError> {
        self.likes.exists(user_id, cafe_id).await
    }

    /// Records the like. There is no upsert: liking the same cafe twice fails
    /// with `DomainError::UniqueViolation` from the store.
    pub async fn like(&self, user_id: i32, cafe_id: i32) -> Result<Like, DomainError> {
        if self.cafes.find_by_id(cafe_id).await?.is_none() {
            return Err(DomainError::NotFound(format!("cafe {}", cafe_id)));
        }
        let like = self.likes.create(user_id, cafe_id).await?;
        info!(user_id, cafe_id, "cafe liked");
        Ok(like)
    }

    /// Removing an absent like is a no-op.
    pub async fn unlike(&self, user_id: i32, cafe_id: i32) -> Result<(), DomainError> {
        let removed = self.likes.delete(user_id, cafe_id).await?;
        info!(user_id, cafe_id, removed, "cafe unliked");
        Ok(())
    }
}
