use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{response::ApiResponse, state::AppState};

pub mod doc;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/planets", planets::router())
        .nest("/planet", planets::router())
        .nest("/people", people::router())
        .nest("/favorite", favorites::router())
}

/// Full application without the transport layers added in `main`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn sitemap() -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::success("Endpoints", doc::endpoint_paths()))
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<()>>) {
    let body = ApiResponse::message(format!("Path {} cannot be found", uri.path()));
    (StatusCode::NOT_FOUND, Json(body))
}
