use serde::Deserialize;
use utoipa::ToSchema;

/// Body for both create and update; every field is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlanetRequest {
    pub name: String,
    pub size: i32,
    pub gravity: String,
}
