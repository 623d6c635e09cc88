//! Favorites association manager.
//!
//! A favorite links one user to exactly one planet or one character. The
//! exactly-one rule is carried by [`FavoriteTarget`]; uniqueness per
//! `(user, target)` is checked before the insert and enforced by the unique
//! indexes created in [`crate::db::run_migrations`].

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::favorites::UserFavorites,
    entity::{
        Characters, Planets, Users, characters,
        favorites::{self, ActiveModel, Column, Entity as Favorites},
        planets,
    },
    error::{AppError, AppResult},
    models::{Character, Favorite, FavoriteTarget, Planet},
};

pub async fn add_favorite_planet<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    planet_id: i32,
) -> AppResult<Favorite> {
    add_favorite(db, user_id, FavoriteTarget::Planet(planet_id)).await
}

pub async fn add_favorite_character<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    character_id: i32,
) -> AppResult<Favorite> {
    add_favorite(db, user_id, FavoriteTarget::Character(character_id)).await
}

/// Checks user, target and duplicate, then inserts.
///
/// The checks are plain reads and the insert is the only write. A duplicate
/// that races past the read check is rejected by the unique index and still
/// reported as a conflict.
pub async fn add_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<Favorite> {
    if Users::find_by_id(user_id).one(db).await?.is_none() {
        return Err(AppError::not_found("User cannot be found"));
    }

    if !target_exists(db, target).await? {
        return Err(AppError::not_found(format!("{} cannot be found", target.kind())));
    }

    let duplicate = || {
        format!(
            "{} {} is already a favorite {} of user {}",
            target.kind(),
            target.id(),
            target.noun(),
            user_id
        )
    };

    if find_row(db, user_id, target).await?.is_some() {
        return Err(AppError::Conflict(duplicate()));
    }

    let row = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        planet_id: Set(target.planet_id()),
        character_id: Set(target.character_id()),
    }
    .insert(db)
    .await
    .map_err(|err| AppError::from_insert(err, duplicate))?;

    tracing::info!(
        favorite_id = row.id,
        user_id,
        target = ?target,
        "favorite added"
    );

    Favorite::try_from(row).map_err(|err| AppError::Internal(err.into()))
}

pub async fn remove_favorite_planet<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    planet_id: i32,
) -> AppResult<()> {
    remove_favorite(db, user_id, FavoriteTarget::Planet(planet_id)).await
}

pub async fn remove_favorite_character<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    character_id: i32,
) -> AppResult<()> {
    remove_favorite(db, user_id, FavoriteTarget::Character(character_id)).await
}

/// Deletes the single row for `(user_id, target)` by its id.
pub async fn remove_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<()> {
    let not_favorite = || {
        AppError::not_found(format!(
            "{} {} is not a favorite {} of user {}",
            target.kind(),
            target.id(),
            target.noun(),
            user_id
        ))
    };

    let row = find_row(db, user_id, target).await?.ok_or_else(not_favorite)?;

    // A concurrent remove may have deleted the row since it was read.
    let result = Favorites::delete_by_id(row.id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_favorite());
    }

    tracing::info!(favorite_id = row.id, user_id, target = ?target, "favorite removed");
    Ok(())
}

/// Every favorite of every user, in insertion order.
pub async fn list_all_favorites<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Favorite>> {
    let rows = Favorites::find().order_by_asc(Column::Id).all(db).await?;
    Ok(into_favorites(rows))
}

/// The user's favorite planets and characters, resolved to full records.
pub async fn list_favorites_for_user<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> AppResult<UserFavorites> {
    if Users::find_by_id(user_id).one(db).await?.is_none() {
        return Err(AppError::not_found(format!("User {user_id} cannot be found")));
    }

    let rows = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    let favorites = into_favorites(rows);

    let planet_ids: Vec<i32> = favorites.iter().filter_map(|f| f.target.planet_id()).collect();
    let character_ids: Vec<i32> = favorites
        .iter()
        .filter_map(|f| f.target.character_id())
        .collect();

    let mut planets_by_id: HashMap<i32, Planet> = Planets::find()
        .filter(planets::Column::Id.is_in(planet_ids.clone()))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, Planet::from(p)))
        .collect();
    let mut characters_by_id: HashMap<i32, Character> = Characters::find()
        .filter(characters::Column::Id.is_in(character_ids.clone()))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, Character::from(c)))
        .collect();

    let planets = planet_ids
        .into_iter()
        .filter_map(|id| resolve(&mut planets_by_id, id, "planet"))
        .collect();
    let people = character_ids
        .into_iter()
        .filter_map(|id| resolve(&mut characters_by_id, id, "character"))
        .collect();

    Ok(UserFavorites {
        user_id,
        planets,
        people,
    })
}

fn resolve<T>(records: &mut HashMap<i32, T>, id: i32, kind: &str) -> Option<T> {
    let record = records.remove(&id);
    if record.is_none() {
        tracing::warn!(target_id = id, kind, "favorite points at a missing record");
    }
    record
}

fn into_favorites(rows: Vec<favorites::Model>) -> Vec<Favorite> {
    rows.into_iter()
        .filter_map(|row| match Favorite::try_from(row) {
            Ok(favorite) => Some(favorite),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed favorite row");
                None
            }
        })
        .collect()
}

async fn target_exists<C: ConnectionTrait>(db: &C, target: FavoriteTarget) -> AppResult<bool> {
    let found = match target {
        FavoriteTarget::Planet(id) => Planets::find_by_id(id).one(db).await?.is_some(),
        FavoriteTarget::Character(id) => Characters::find_by_id(id).one(db).await?.is_some(),
    };
    Ok(found)
}

async fn find_row<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<Option<favorites::Model>> {
    let query = Favorites::find().filter(Column::UserId.eq(user_id));
    let query = match target {
        FavoriteTarget::Planet(id) => query
            .filter(Column::PlanetId.eq(id))
            .filter(Column::CharacterId.is_null()),
        FavoriteTarget::Character(id) => query
            .filter(Column::CharacterId.eq(id))
            .filter(Column::PlanetId.is_null()),
    };
    Ok(query.one(db).await?)
}
