use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::characters::CharacterRequest,
    error::AppResult,
    extract::{AppJson, AppPath},
    models::Character,
    response::ApiResponse,
    services::character_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people).post(create_person))
        .route(
            "/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All characters, ordered by id", body = Vec<Character>)
    ),
    tag = "People"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let people = character_service::list_characters(&state.orm).await?;
    Ok(Json(people))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = Character),
        (status = 404, description = "Character not found"),
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<Character>> {
    let character = character_service::get_character(&state.orm, id).await?;
    Ok(Json(character))
}

#[utoipa::path(
    post,
    path = "/people",
    request_body = CharacterRequest,
    responses(
        (status = 200, description = "Create character", body = ApiResponse<Character>),
        (status = 400, description = "Wrong request")
    ),
    tag = "People"
)]
pub async fn create_person(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CharacterRequest>,
) -> AppResult<Json<ApiResponse<Character>>> {
    let character = character_service::create_character(&state.orm, payload).await?;
    Ok(Json(ApiResponse::success("Character created", character)))
}

#[utoipa::path(
    put,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = CharacterRequest,
    responses(
        (status = 200, description = "Update character", body = ApiResponse<Character>),
        (status = 400, description = "Wrong request"),
        (status = 404, description = "Character not found")
    ),
    tag = "People"
)]
pub async fn update_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<CharacterRequest>,
) -> AppResult<Json<ApiResponse<Character>>> {
    let character = character_service::update_character(&state.orm, id, payload).await?;
    Ok(Json(ApiResponse::success(
        format!("Character {id} updated"),
        character,
    )))
}

#[utoipa::path(
    delete,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character and its favorites deleted"),
        (status = 404, description = "Character not found")
    ),
    tag = "People"
)]
pub async fn delete_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    character_service::delete_character(&state.orm, id).await?;
    Ok(Json(ApiResponse::message(format!("Character {id} deleted"))))
}
