use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use tracing::instrument;

use crate::application::cafes::dto::CafeForm;
use crate::domain::errors::{DomainError, FieldErrors};
use crate::presentation::http::{
    context::PageContext, errors::AppError, session::redirect_with_flash, state::AppState, views,
};

const ADD_FAILED_MSG: &str = "Could not add cafe to database.";
const EDIT_FAILED_MSG: &str = "Could not save changes.";

pub async fn list_cafes(
    State(state): State<AppState>,
    ctx: PageContext,
) -> Result<Response, AppError> {
    let cafes = state.cafes().list_cafes().await?;
    Ok(ctx.render("Cafes", &views::cafes::cafe_list(&cafes)))
}

pub async fn cafe_detail(
    State(state): State<AppState>,
    ctx: PageContext,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let detail = state.cafes().get_cafe(id).await?;
    let body = views::cafes::cafe_detail(&detail, ctx.user.is_some());
    Ok(ctx.render(&detail.cafe.name, &body))
}

/// Renders the add form, optionally with errors from a rejected submission.
async fn render_add_form(
    state: &AppState,
    ctx: &PageContext,
    form: &CafeForm,
    errors: &FieldErrors,
    message: Option<&str>,
) -> Result<Response, AppError> {
    let cities = state.cafes().city_choices().await?;
    let body = views::cafes::cafe_form(
        "Add Cafe",
        "/cafes/add",
        "Add Cafe",
        form,
        &cities,
        errors,
        message,
    );
    Ok(ctx.render("Add Cafe", &body))
}

pub async fn add_cafe_form(
    State(state): State<AppState>,
    ctx: PageContext,
) -> Result<Response, AppError> {
    render_add_form(&state, &ctx, &CafeForm::default(), &FieldErrors::new(), None).await
}

#[instrument(skip(state, ctx, form), fields(name = %form.name))]
pub async fn add_cafe(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<CafeForm>,
) -> Result<Response, AppError> {
    match state.cafes().create_cafe(form.clone()).await {
        Ok(cafe) => Ok(redirect_with_flash(
            &format!("/cafes/{}", cafe.id),
            &format!("{} added.", cafe.name),
            &state.config,
            [],
        )),
        Err(DomainError::Invalid(errors)) => {
            render_add_form(&state, &ctx, &form, &errors, None).await
        }
        Err(e) if e.is_integrity() => {
            tracing::warn!(error = %e, "cafe insert rejected by store");
            render_add_form(&state, &ctx, &form, &FieldErrors::new(), Some(ADD_FAILED_MSG)).await
        }
        Err(e) => Err(e.into()),
    }
}

async fn render_edit_form(
    state: &AppState,
    ctx: &PageContext,
    id: i32,
    stored_name: &str,
    form: &CafeForm,
    errors: &FieldErrors,
    message: Option<&str>,
) -> Result<Response, AppError> {
    let cities = state.cafes().city_choices().await?;
    let title = format!("Edit {}", stored_name);
    let body = views::cafes::cafe_form(
        &title,
        &format!("/cafes/{}/edit", id),
        "Save Changes",
        form,
        &cities,
        errors,
        message,
    );
    Ok(ctx.render(&title, &body))
}

pub async fn edit_cafe_form(
    State(state): State<AppState>,
    ctx: PageContext,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let detail = state.cafes().get_cafe(id).await?;
    let form = CafeForm::from(&detail.cafe);
    render_edit_form(&state, &ctx, id, &detail.cafe.name, &form, &FieldErrors::new(), None).await
}

#[instrument(skip(state, ctx, form))]
pub async fn edit_cafe(
    State(state): State<AppState>,
    ctx: PageContext,
    Path(id): Path<i32>,
    Form(form): Form<CafeForm>,
) -> Result<Response, AppError> {
    let cafes = state.cafes();
    let stored = cafes.get_cafe(id).await?;

    match cafes.update_cafe(id, form.clone()).await {
        Ok(cafe) => Ok(redirect_with_flash(
            &format!("/cafes/{}", cafe.id),
            &format!("{} edited.", cafe.name),
            &state.config,
            [],
        )),
        Err(DomainError::Invalid(errors)) => {
            render_edit_form(&state, &ctx, id, &stored.cafe.name, &form, &errors, None).await
        }
        Err(e) if e.is_integrity() => {
            tracing::warn!(error = %e, "cafe update rejected by store");
            render_edit_form(
                &state,
                &ctx,
                id,
                &stored.cafe.name,
                &form,
                &FieldErrors::new(),
                Some(EDIT_FAILED_MSG),
            )
            .await
        }
        Err(e) => Err(e.into()),
    }
}
