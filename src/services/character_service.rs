use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::characters::CharacterRequest,
    entity::{
        Favorites,
        characters::{ActiveModel, Column, Entity as Characters},
        favorites,
    },
    error::{AppError, AppResult},
    models::Character,
};

pub async fn list_characters<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Character>> {
    let characters = Characters::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Character::from)
        .collect();
    Ok(characters)
}

pub async fn find_character<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Character>> {
    Ok(Characters::find_by_id(id).one(db).await?.map(Character::from))
}

pub async fn get_character<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Character> {
    find_character(db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Character ID {id} cannot be found")))
}

pub async fn create_character<C: ConnectionTrait>(
    db: &C,
    payload: CharacterRequest,
) -> AppResult<Character> {
    let character = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        age: Set(payload.age),
    }
    .insert(db)
    .await?;
    tracing::info!(character_id = character.id, "character created");
    Ok(character.into())
}

pub async fn update_character<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: CharacterRequest,
) -> AppResult<Character> {
    let existing = Characters::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Character ID {id} cannot be found")))?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.age = Set(payload.age);

    let character = active.update(db).await?;
    tracing::info!(character_id = character.id, "character updated");
    Ok(character.into())
}

pub async fn delete_character<C: TransactionTrait>(db: &C, id: i32) -> AppResult<()> {
    let txn = db.begin().await?;

    Favorites::delete_many()
        .filter(favorites::Column::CharacterId.eq(id))
        .exec(&txn)
        .await?;
    let result = Characters::delete_by_id(id).exec(&txn).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(format!("Character ID {id} cannot be found")));
    }
    txn.commit().await?;

    tracing::info!(character_id = id, "character deleted");
    Ok(())
}
