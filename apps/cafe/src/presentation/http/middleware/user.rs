use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::presentation::http::{
    session::{SessionClaims, current_session},
    state::AppState,
};

/// Session claims of the caller, if any. Used by the JSON endpoints, which
/// only need the user id and never redirect.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Option<SessionClaims>);

impl SessionUser {
    pub fn user_id(&self) -> Option<i32> {
        self.0.as_ref().and_then(SessionClaims::user_id)
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self(current_session(
            &parts.headers,
            &state.config.session_secret,
        )))
    }
}
