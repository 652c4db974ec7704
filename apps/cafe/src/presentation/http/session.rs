//! Cookie-backed session marker and flash messages.
//!
//! The session marker is a signed JWT naming the logged-in user, kept in the
//! `curr_user` cookie. Flash messages survive exactly one redirect in the
//! `flash` cookie.

use axum::{
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
};
use cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::presentation::http::errors::AppError;

pub const SESSION_COOKIE: &str = "curr_user";
pub const FLASH_COOKIE: &str = "flash";
pub const NOT_LOGGED_IN_MSG: &str = "You are not logged in.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

impl SessionClaims {
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

pub fn issue_session_token(
    user_id: i32,
    username: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, AppError> {
    let exp = chrono::Duration::try_hours(ttl_hours)
        .and_then(|ttl| chrono::Utc::now().checked_add_signed(ttl))
        .and_then(|expiry| usize::try_from(expiry.timestamp()).ok())
        .ok_or_else(|| AppError::Internal(format!("Session expiry out of range: {}h", ttl_hours)))?;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Session token generation failed: {}", e)))
}

pub fn decode_session_token(token: &str, secret: &str) -> Option<SessionClaims> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|d| d.claims)
}

pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse_encoded)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Claims of a valid session cookie; expired or forged tokens read as anonymous.
pub fn current_session(headers: &HeaderMap, secret: &str) -> Option<SessionClaims> {
    let token = read_cookie(headers, SESSION_COOKIE)?;
    decode_session_token(&token, secret)
}

fn base_cookie(name: &'static str, value: String, config: &Config) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .build()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.make_removal();
    cookie
}

pub fn session_cookie(token: String, config: &Config) -> Cookie<'static> {
    base_cookie(SESSION_COOKIE, token, config)
}

pub fn clear_session_cookie() -> Cookie<'static> {
    removal_cookie(SESSION_COOKIE)
}

pub fn flash_cookie(message: &str, config: &Config) -> Cookie<'static> {
    base_cookie(FLASH_COOKIE, message.to_string(), config)
}

pub fn clear_flash_cookie() -> Cookie<'static> {
    removal_cookie(FLASH_COOKIE)
}

pub fn append_cookies(response: &mut Response, cookies: impl IntoIterator<Item = Cookie<'static>>) {
    for cookie in cookies {
        match HeaderValue::from_str(&cookie.encoded().to_string()) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(cookie = cookie.name(), error = %e, "unencodable cookie dropped"),
        }
    }
}

/// 303 redirect carrying a flash message plus any extra cookies.
pub fn redirect_with_flash(
    to: &str,
    message: &str,
    config: &Config,
    extra: impl IntoIterator<Item = Cookie<'static>>,
) -> Response {
    let mut response = Redirect::to(to).into_response();
    append_cookies(&mut response, extra);
    append_cookies(&mut response, [flash_cookie(message, config)]);
    response
}
