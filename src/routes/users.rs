use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::favorites::UserFavorites,
    error::{AppError, AppResult},
    extract::AppPath,
    models::{Favorite, User},
    services::{favorite_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/favorites", get(list_all_favorites))
        .route("/{id}", get(get_user))
        .route("/{id}/favorites", get(list_user_favorites))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, ordered by id", body = Vec<User>),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::list_users(&state.orm).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<User>> {
    let user = user_service::get_user(&state.orm, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    responses(
        (status = 200, description = "Every favorite of every user", body = Vec<Favorite>),
        (status = 404, description = "No favorites added yet"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Favorites"
)]
pub async fn list_all_favorites(State(state): State<AppState>) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = favorite_service::list_all_favorites(&state.orm).await?;
    if favorites.is_empty() {
        return Err(AppError::not_found("No favorites added yet"));
    }
    Ok(Json(favorites))
}

#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorite planets and people of a user", body = UserFavorites),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Favorites"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<UserFavorites>> {
    let favorites = favorite_service::list_favorites_for_user(&state.orm, id).await?;
    Ok(Json(favorites))
}
