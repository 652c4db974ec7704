use axum::{Form, extract::State, response::Response};
use tracing::instrument;

use crate::application::profile::dto::ProfileForm;
use crate::domain::errors::{DomainError, FieldErrors};
use crate::domain::user::entity::User;
use crate::presentation::http::{
    context::PageContext,
    errors::AppError,
    session::{NOT_LOGGED_IN_MSG, redirect_with_flash},
    state::AppState,
    views,
};

const SAVE_FAILED_MSG: &str = "Could not save changes.";

fn require_login(state: &AppState, ctx: &PageContext) -> Result<User, Response> {
    ctx.user
        .clone()
        .ok_or_else(|| redirect_with_flash("/login", NOT_LOGGED_IN_MSG, &state.config, []))
}

pub async fn profile(
    State(state): State<AppState>,
    ctx: PageContext,
) -> Result<Response, AppError> {
    let user = match require_login(&state, &ctx) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect),
    };
    let liked = state.profiles().liked_cafes(user.id).await?;
    Ok(ctx.render("Profile", &views::profile::profile_page(&user, &liked)))
}

pub async fn edit_profile_form(State(state): State<AppState>, ctx: PageContext) -> Response {
    let user = match require_login(&state, &ctx) {
        Ok(user) => user,
        Err(redirect) => return redirect,
    };
    let form = ProfileForm::from(&user);
    ctx.render(
        "Edit Profile",
        &views::profile::profile_edit_page(&form, &FieldErrors::new(), None),
    )
}

#[instrument(skip(state, ctx, form))]
pub async fn edit_profile(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let user = match require_login(&state, &ctx) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect),
    };

    let page = |errors: &FieldErrors, message: Option<&str>| {
        ctx.render(
            "Edit Profile",
            &views::profile::profile_edit_page(&form, errors, message),
        )
    };

    match state.profiles().edit_profile(user.id, form.clone()).await {
        Ok(_) => Ok(redirect_with_flash(
            "/profile",
            "Profile edited.",
            &state.config,
            [],
        )),
        Err(DomainError::Invalid(errors)) => Ok(page(&errors, None)),
        Err(e) if e.is_integrity() => {
            tracing::warn!(error = %e, user_id = user.id, "profile update rejected by store");
            Ok(page(&FieldErrors::new(), Some(SAVE_FAILED_MSG)))
        }
        Err(e) => Err(e.into()),
    }
}
