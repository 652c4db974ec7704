use serde::{Deserialize, Serialize};

pub const DEFAULT_CAFE_IMAGE_URL: &str = "/static/images/default-cafe.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub address: String,
    pub city_code: String,
    pub image_url: String,
}

/// A cafe joined with the city it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CafeDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cafe: Cafe,
    pub city_name: String,
    pub city_state: String,
}

impl CafeDetail {
    /// "City, ST" for display.
    pub fn city_state(&self) -> String {
        format!("{}, {}", self.city_name, self.city_state)
    }
}

/// Editable columns of a cafe, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeFields {
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub address: String,
    pub city_code: String,
    pub image_url: String,
}
