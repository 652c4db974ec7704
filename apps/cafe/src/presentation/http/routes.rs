use super::{
    handlers::{auth, cafes, health, home, likes, profile},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Pages
        .route("/", get(home::homepage))
        .route("/cafes", get(cafes::list_cafes))
        .route(
            "/cafes/add",
            get(cafes::add_cafe_form).post(cafes::add_cafe),
        )
        .route("/cafes/{id}", get(cafes::cafe_detail))
        .route(
            "/cafes/{id}/edit",
            get(cafes::edit_cafe_form).post(cafes::edit_cafe),
        )
        // Auth
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
        // Profile
        .route("/profile", get(profile::profile))
        .route(
            "/profile/edit",
            get(profile::edit_profile_form).post(profile::edit_profile),
        )
        // Likes API
        .route("/api/likes", get(likes::likes))
        .route("/api/like", post(likes::like))
        .route("/api/unlike", post(likes::unlike))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
