use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Character, Planet};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub user_id: i32,
}

/// Everything a user has marked as favorite, with the full target records.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserFavorites {
    #[serde(rename = "User_id")]
    pub user_id: i32,
    #[serde(rename = "favourite_planets")]
    pub planets: Vec<Planet>,
    #[serde(rename = "favorite_people")]
    pub people: Vec<Character>,
}
