use super::dto::ProfileForm;
use crate::domain::{
    cafe::entity::Cafe,
    errors::DomainError,
    like::repository::LikeRepository,
    user::{entity::User, repository::UserRepository},
};
use std::sync::Arc;
use validator::Validate;

pub struct ProfileUseCase {
    users: Arc<dyn UserRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl ProfileUseCase {
    pub fn new(users: Arc<dyn UserRepository>, likes: Arc<dyn LikeRepository>) -> Self {
        Self { users, likes }
    }

    /// Cafes the user likes, ordered by name.
    pub async fn liked_cafes(&self, user_id: i32) -> Result<Vec<Cafe>, DomainError> {
        self.likes.liked_cafes(user_id).await
    }

    pub async fn edit_profile(&self, user_id: i32, form: ProfileForm) -> Result<User, DomainError> {
        form.validate().map_err(|e| DomainError::Invalid(e.into()))?;
        self.users.update_profile(user_id, &form.into_fields()).await
    }
}
