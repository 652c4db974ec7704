use serde::Serialize;

pub const DEFAULT_USER_IMAGE_URL: &str = "/static/images/default-pic.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub image_url: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Row to insert at registration. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub hashed_password: String,
}

/// Columns a user may change from the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub image_url: String,
}
