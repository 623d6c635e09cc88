use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::planets::PlanetRequest,
    entity::{
        Favorites, favorites,
        planets::{ActiveModel, Column, Entity as Planets},
    },
    error::{AppError, AppResult},
    models::Planet,
};

pub async fn list_planets<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Planet>> {
    let planets = Planets::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(planets)
}

/// Returns `None` when no planet has this id.
pub async fn find_planet<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Planet>> {
    Ok(Planets::find_by_id(id).one(db).await?.map(Planet::from))
}

pub async fn get_planet<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Planet> {
    find_planet(db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Planet ID {id} cannot be found")))
}

pub async fn create_planet<C: ConnectionTrait>(db: &C, payload: PlanetRequest) -> AppResult<Planet> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        size: Set(payload.size),
        gravity: Set(payload.gravity),
    };
    let planet = active.insert(db).await?;
    tracing::info!(planet_id = planet.id, "planet created");
    Ok(planet.into())
}

pub async fn update_planet<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: PlanetRequest,
) -> AppResult<Planet> {
    let existing = Planets::find_by_id(id).one(db).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::not_found(format!("Planet ID {id} cannot be found"))),
    };

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.size = Set(payload.size);
    active.gravity = Set(payload.gravity);

    let planet = active.update(db).await?;
    tracing::info!(planet_id = planet.id, "planet updated");
    Ok(planet.into())
}

/// Deletes the planet together with every favorite that points at it.
pub async fn delete_planet<C: TransactionTrait>(db: &C, id: i32) -> AppResult<()> {
    let txn = db.begin().await?;

    let removed = Favorites::delete_many()
        .filter(favorites::Column::PlanetId.eq(id))
        .exec(&txn)
        .await?;
    let result = Planets::delete_by_id(id).exec(&txn).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(format!("Planet ID {id} cannot be found")));
    }
    txn.commit().await?;

    tracing::info!(
        planet_id = id,
        favorites_removed = removed.rows_affected,
        "planet deleted"
    );
    Ok(())
}
