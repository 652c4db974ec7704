//! JSON endpoints used by the like/unlike buttons on the cafe detail page.
//!
//! Anonymous callers get `{"error": "Not logged in"}` with status 200 and
//! nothing is changed. The session is checked before the body or query is
//! looked at, so an anonymous caller never sees a parse error.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use tracing::{instrument, warn};

use crate::application::likes::dto::{
    LikeRequest, LikedResponse, LikesQuery, LikesResponse, UnlikedResponse,
};
use crate::domain::errors::DomainError;
use crate::presentation::http::{
    errors::{ApiError, ApiErrorBody, AppError},
    middleware::user::SessionUser,
    state::AppState,
};

const ALREADY_LIKED_MSG: &str = "Cafe already liked";

/// Foreign key from `likes.user_id` to `users.id`. Tripping it means the
/// session names a user that no longer exists.
const LIKES_USER_FK: &str = "likes_user_id_fkey";

fn not_logged_in() -> Response {
    Json(ApiErrorBody::not_logged_in()).into_response()
}

fn bad_request(message: String) -> ApiError {
    ApiError(AppError::BadRequest(message))
}

pub async fn likes(
    State(state): State<AppState>,
    session: SessionUser,
    query: Result<Query<LikesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Some(user_id) = session.user_id() else {
        return Ok(not_logged_in());
    };
    let Query(query) = query.map_err(|rejection| bad_request(rejection.body_text()))?;
    let likes = state.likes().likes(user_id, query.cafe_id).await?;
    Ok(Json(LikesResponse { likes }).into_response())
}

#[instrument(skip_all)]
pub async fn like(
    State(state): State<AppState>,
    session: SessionUser,
    body: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Some(user_id) = session.user_id() else {
        return Ok(not_logged_in());
    };
    let Json(body) = body.map_err(|rejection| bad_request(rejection.body_text()))?;
    match state.likes().like(user_id, body.cafe_id).await {
        Ok(like) => Ok(Json(LikedResponse {
            liked: like.cafe_id,
        })
        .into_response()),
        Err(DomainError::UniqueViolation(_)) => {
            Err(AppError::Conflict(ALREADY_LIKED_MSG.into()).into())
        }
        Err(DomainError::IntegrityViolation(constraint)) if constraint == LIKES_USER_FK => {
            warn!(user_id, "session names a user that no longer exists");
            Ok(not_logged_in())
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip_all)]
pub async fn unlike(
    State(state): State<AppState>,
    session: SessionUser,
    body: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Some(user_id) = session.user_id() else {
        return Ok(not_logged_in());
    };
    let Json(body) = body.map_err(|rejection| bad_request(rejection.body_text()))?;
    state.likes().unlike(user_id, body.cafe_id).await?;
    Ok(Json(UnlikedResponse {
        unliked: body.cafe_id,
    })
    .into_response())
}
