use axum::{Form, extract::State, response::Response};
use tracing::instrument;

use crate::application::auth::dto::{LoginForm, SignupForm};
use crate::domain::errors::{DomainError, FieldErrors};
use crate::domain::user::entity::User;
use crate::presentation::http::{
    context::PageContext,
    errors::AppError,
    middleware::user::SessionUser,
    session::{clear_session_cookie, issue_session_token, redirect_with_flash, session_cookie},
    state::AppState,
    views,
};

const INVALID_CREDENTIALS_MSG: &str = "Invalid credentials.";

/// Redirects to the cafe list with the session cookie for `user` set.
fn log_in(state: &AppState, user: &User, message: &str) -> Result<Response, AppError> {
    let token = issue_session_token(
        user.id,
        &user.username,
        &state.config.session_secret,
        state.config.session_ttl_hours,
    )?;
    Ok(redirect_with_flash(
        "/cafes",
        message,
        &state.config,
        [session_cookie(token, &state.config)],
    ))
}

pub async fn signup_form(ctx: PageContext) -> Response {
    ctx.render(
        "Sign Up",
        &views::auth::signup_page(&SignupForm::default(), &FieldErrors::new(), None),
    )
}

#[instrument(skip(state, ctx, form), fields(username = %form.username))]
pub async fn signup(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    match state.auth().register(form.clone()).await {
        Ok(user) => log_in(&state, &user, "You are signed up and logged in."),
        Err(DomainError::Invalid(errors)) => Ok(ctx.render(
            "Sign Up",
            &views::auth::signup_page(&form, &errors, None),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn login_form(ctx: PageContext) -> Response {
    ctx.render(
        "Log In",
        &views::auth::login_page(&LoginForm::default(), &FieldErrors::new(), None),
    )
}

#[instrument(skip(state, ctx, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state.auth().authenticate(&form).await {
        Ok(Some(user)) => log_in(&state, &user, &format!("Hello, {}!", user.username)),
        Ok(None) => Ok(ctx.render(
            "Log In",
            &views::auth::login_page(&form, &FieldErrors::new(), Some(INVALID_CREDENTIALS_MSG)),
        )),
        Err(DomainError::Invalid(errors)) => Ok(ctx.render(
            "Log In",
            &views::auth::login_page(&form, &errors, None),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn logout(State(state): State<AppState>, session: SessionUser) -> Response {
    if let Some(user_id) = session.user_id() {
        tracing::info!(user_id, "user logged out");
    }
    redirect_with_flash(
        "/login",
        "You have successfully logged out.",
        &state.config,
        [clear_session_cookie()],
    )
}
