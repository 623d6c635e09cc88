#![allow(dead_code)]

use axum_starwars_api::{
    db::run_migrations,
    dto::{characters::CharacterRequest, planets::PlanetRequest},
    entity::users::ActiveModel as UserActive,
    models::{Character, Planet},
    services::{character_service, planet_service},
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};

/// Fresh in-memory database with the schema applied.
///
/// A single pooled connection keeps every query on the same SQLite memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;

    Ok(AppState { orm })
}

/// File-backed database shared by several pooled connections, so writers can race.
pub async fn setup_shared_state(name: &str) -> anyhow::Result<AppState> {
    let path = std::env::temp_dir().join(format!("{name}-{}.db", std::process::id()));
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }

    let mut options = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    options.max_connections(8).sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;

    Ok(AppState { orm })
}

pub async fn create_user(state: &AppState, email: &str) -> anyhow::Result<i32> {
    let user = UserActive {
        id: NotSet,
        email: Set(email.to_string()),
        password: Set("dummy".into()),
        is_active: Set(true),
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}

pub async fn create_planet(state: &AppState, name: &str) -> anyhow::Result<Planet> {
    let planet = planet_service::create_planet(
        &state.orm,
        PlanetRequest {
            name: name.to_string(),
            size: 10465,
            gravity: "1 standard".into(),
        },
    )
    .await?;
    Ok(planet)
}

pub async fn create_character(state: &AppState, name: &str) -> anyhow::Result<Character> {
    let character = character_service::create_character(
        &state.orm,
        CharacterRequest {
            name: name.to_string(),
            age: 19,
        },
    )
    .await?;
    Ok(character)
}
