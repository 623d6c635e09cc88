use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        characters::CharacterRequest,
        favorites::{AddFavoriteRequest, UserFavorites},
        planets::PlanetRequest,
    },
    models::{Character, Favorite, FavoriteTarget, Planet, User},
    response::ApiResponse,
    routes::{favorites, health, people, planets, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::list_all_favorites,
        users::list_user_favorites,
        planets::list_planets,
        planets::get_planet,
        planets::create_planet,
        planets::update_planet,
        planets::delete_planet,
        people::list_people,
        people::get_person,
        people::create_person,
        people::update_person,
        people::delete_person,
        favorites::add_favorite_planet,
        favorites::add_favorite_people,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_people
    ),
    components(
        schemas(
            User,
            Planet,
            Character,
            Favorite,
            FavoriteTarget,
            UserFavorites,
            AddFavoriteRequest,
            PlanetRequest,
            CharacterRequest,
            health::HealthData,
            ApiResponse<Planet>,
            ApiResponse<Character>,
            ApiResponse<Favorite>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "People", description = "Character endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

/// Every documented endpoint path, in lexical order.
pub fn endpoint_paths() -> Vec<String> {
    ApiDoc::openapi().paths.paths.into_keys().collect()
}
