use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ComponentStatus {
    Up,
    Down,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub database: ComponentStatus,
    pub version: String,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => ComponentStatus::Up,
        Err(e) => {
            tracing::error!(error = %e, "health check: database unreachable");
            ComponentStatus::Down
        }
    };

    let (code, status) = match database {
        ComponentStatus::Up => (StatusCode::OK, "healthy"),
        ComponentStatus::Down => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy"),
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            database,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
