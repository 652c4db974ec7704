use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{Html, IntoResponse, Response},
};

use crate::domain::user::entity::User;
use crate::presentation::http::{
    errors::AppError,
    session::{FLASH_COOKIE, append_cookies, clear_flash_cookie, current_session, read_cookie},
    state::AppState,
    views,
};

/// Per-request data every rendered page needs: who is logged in and which
/// flash message to show.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub user: Option<User>,
    pub flash: Option<String>,
    flash_cookie_seen: bool,
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let flash = read_cookie(&parts.headers, FLASH_COOKIE).filter(|m| !m.is_empty());

        let user = match current_session(&parts.headers, &state.config.session_secret)
            .and_then(|claims| claims.user_id())
        {
            Some(id) => state.user_repo.find_by_id(id).await?,
            None => None,
        };

        Ok(Self {
            user,
            flash_cookie_seen: flash.is_some(),
            flash,
        })
    }
}

impl PageContext {
    /// Shows `message` on the page rendered by this request.
    pub fn with_flash(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self
    }

    pub fn render(&self, title: &str, body: &str) -> Response {
        let mut response = Html(views::layout(self, title, body)).into_response();
        if self.flash_cookie_seen {
            append_cookies(&mut response, [clear_flash_cookie()]);
        }
        response
    }
}
