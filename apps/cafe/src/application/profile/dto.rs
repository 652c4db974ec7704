use crate::application::forms::{empty_as_none, trimmed};
use crate::domain::user::entity::{DEFAULT_USER_IMAGE_URL, ProfileFields, User};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ProfileForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub first_name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub last_name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(email(message = "Invalid email address."))]
    pub email: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Invalid URL."))]
    pub image_url: Option<String>,
}

impl ProfileForm {
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            description: self.description,
            image_url: self
                .image_url
                .unwrap_or_else(|| DEFAULT_USER_IMAGE_URL.to_string()),
        }
    }
}

impl From<&User> for ProfileForm {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            description: user.description.clone(),
            email: user.email.clone(),
            image_url: Some(user.image_url.clone()).filter(|u| u != DEFAULT_USER_IMAGE_URL),
        }
    }
}
