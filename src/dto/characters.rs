use serde::Deserialize;
use utoipa::ToSchema;

/// Body for both create and update; every field is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CharacterRequest {
    pub name: String,
    pub age: i32,
}
