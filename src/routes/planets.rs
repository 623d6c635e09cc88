use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::planets::PlanetRequest,
    error::AppResult,
    extract::{AppJson, AppPath},
    models::Planet,
    response::ApiResponse,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets).post(create_planet))
        .route(
            "/{id}",
            get(get_planet).put(update_planet).delete(delete_planet),
        )
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets, ordered by id", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = planet_service::list_planets(&state.orm).await?;
    Ok(Json(planets))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found"),
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<Planet>> {
    let planet = planet_service::get_planet(&state.orm, id).await?;
    Ok(Json(planet))
}

#[utoipa::path(
    post,
    path = "/planets",
    request_body = PlanetRequest,
    responses(
        (status = 200, description = "Create planet", body = ApiResponse<Planet>),
        (status = 400, description = "Wrong request")
    ),
    tag = "Planets"
)]
pub async fn create_planet(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PlanetRequest>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let planet = planet_service::create_planet(&state.orm, payload).await?;
    Ok(Json(ApiResponse::success("Planet created", planet)))
}

#[utoipa::path(
    put,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    request_body = PlanetRequest,
    responses(
        (status = 200, description = "Update planet", body = ApiResponse<Planet>),
        (status = 400, description = "Wrong request"),
        (status = 404, description = "Planet not found")
    ),
    tag = "Planets"
)]
pub async fn update_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<PlanetRequest>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let planet = planet_service::update_planet(&state.orm, id, payload).await?;
    Ok(Json(ApiResponse::success(
        format!("Planet {id} updated"),
        planet,
    )))
}

#[utoipa::path(
    delete,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet and its favorites deleted"),
        (status = 404, description = "Planet not found")
    ),
    tag = "Planets"
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    planet_service::delete_planet(&state.orm, id).await?;
    Ok(Json(ApiResponse::message(format!("Planet {id} deleted"))))
}
