use crate::application::forms::{empty_as_none, trimmed};
use crate::domain::cafe::entity::{Cafe, CafeFields, DEFAULT_CAFE_IMAGE_URL};
use serde::Deserialize;
use validator::Validate;

/// Add/edit cafe form as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct CafeForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Invalid URL."))]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub address: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Not a valid choice."))]
    pub city_code: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Invalid URL."))]
    pub image_url: Option<String>,
}

impl CafeForm {
    pub fn into_fields(self) -> CafeFields {
        CafeFields {
            name: self.name,
            description: self.description,
            url: self.url,
            address: self.address,
            city_code: self.city_code,
            image_url: self
                .image_url
                .unwrap_or_else(|| DEFAULT_CAFE_IMAGE_URL.to_string()),
        }
    }
}

/// Pre-fills the edit form with the stored values. The default image is shown
/// as an empty field so resubmitting does not pin it as a custom URL.
impl From<&Cafe> for CafeForm {
    fn from(cafe: &Cafe) -> Self {
        Self {
            name: cafe.name.clone(),
            description: cafe.description.clone(),
            url: cafe.url.clone(),
            address: cafe.address.clone(),
            city_code: cafe.city_code.clone(),
            image_url: Some(cafe.image_url.clone()).filter(|u| u != DEFAULT_CAFE_IMAGE_URL),
        }
    }
}
