use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::members::member_routes;
use super::workout_sessions::workout_session_routes;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_routes(db: SqlitePool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(member_routes(db.clone()))
        .merge(workout_session_routes(db))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
