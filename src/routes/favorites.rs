use axum::{
    Json, Router,
    extract::State,
    routing::{delete, post},
};

use crate::{
    dto::favorites::AddFavoriteRequest,
    error::AppResult,
    extract::{AppJson, AppPath},
    models::Favorite,
    response::ApiResponse,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planet/{planet_id}", post(add_favorite_planet))
        .route("/people/{people_id}", post(add_favorite_people))
        .route(
            "/user/{user_id}/planet/{planet_id}",
            delete(remove_favorite_planet),
        )
        .route(
            "/user/{user_id}/people/{people_id}",
            delete(remove_favorite_people),
        )
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<Favorite>),
        (status = 400, description = "Wrong request or already a favorite"),
        (status = 404, description = "User or planet not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<i32>,
    AppJson(payload): AppJson<AddFavoriteRequest>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let favorite =
        favorite_service::add_favorite_planet(&state.orm, payload.user_id, planet_id).await?;
    Ok(Json(ApiResponse::success(
        format!("Favourite planet {planet_id} added to favorites of user"),
        favorite,
    )))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Character ID")
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<Favorite>),
        (status = 400, description = "Wrong request or already a favorite"),
        (status = 404, description = "User or character not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    AppPath(people_id): AppPath<i32>,
    AppJson(payload): AppJson<AddFavoriteRequest>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let favorite =
        favorite_service::add_favorite_character(&state.orm, payload.user_id, people_id).await?;
    Ok(Json(ApiResponse::success(
        format!("Favourite character {people_id} added to favorites of user"),
        favorite,
    )))
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites"),
        (status = 404, description = "Favorite not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    AppPath((user_id, planet_id)): AppPath<(i32, i32)>,
) -> AppResult<Json<ApiResponse<()>>> {
    favorite_service::remove_favorite_planet(&state.orm, user_id, planet_id).await?;
    Ok(Json(ApiResponse::message(format!(
        "Planet {planet_id} removed from favorites of user {user_id}"
    ))))
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/people/{people_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites"),
        (status = 404, description = "Favorite not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_people(
    State(state): State<AppState>,
    AppPath((user_id, people_id)): AppPath<(i32, i32)>,
) -> AppResult<Json<ApiResponse<()>>> {
    favorite_service::remove_favorite_character(&state.orm, user_id, people_id).await?;
    Ok(Json(ApiResponse::message(format!(
        "Character {people_id} removed from favorites of user {user_id}"
    ))))
}
