use serde::{Deserialize, Serialize};

/// A user favoriting a cafe. At most one row exists per (user, cafe) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub user_id: i32,
    pub cafe_id: i32,
}
