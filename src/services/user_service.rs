use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::{
    entity::users::{Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
};

pub async fn list_users<C: ConnectionTrait>(db: &C) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(users)
}

pub async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<User>> {
    Ok(Users::find_by_id(id).one(db).await?.map(User::from))
}

pub async fn get_user<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<User> {
    find_user(db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User ID {id} cannot be found")))
}
