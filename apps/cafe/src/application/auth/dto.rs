use crate::application::forms::{empty_as_none, trimmed};
use lazy_static::lazy_static;
use serde::Deserialize;
use validator::Validate;

lazy_static! {
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap();
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 30, message = "Username must be 1-30 characters."),
        regex(
            path = *USERNAME_REGEX,
            message = "Use letters, digits, '_', '.' or '-' only."
        )
    )]
    pub username: String,

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

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Invalid URL."))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub password: String,
}
