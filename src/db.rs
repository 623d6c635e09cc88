use anyhow::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
    sea_query::{Index, IndexCreateStatement},
};

use crate::entity::{Characters, Favorites, Planets, Users, favorites};

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Creates every table derived from the entities, then the favorite uniqueness indexes.
///
/// Idempotent: safe to run on every startup.
pub async fn run_migrations<C: ConnectionTrait>(conn: &C) -> Result<()> {
    create_table(conn, Users).await?;
    create_table(conn, Planets).await?;
    create_table(conn, Characters).await?;
    create_table(conn, Favorites).await?;

    // NULL never equals NULL in a unique index, so each index only constrains
    // rows whose target column is set.
    let backend = conn.get_database_backend();
    for index in favorite_indexes() {
        conn.execute(backend.build(&index)).await?;
    }

    Ok(())
}

async fn create_table<C, E>(conn: &C, entity: E) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    conn.execute(backend.build(&stmt)).await?;
    Ok(())
}

fn favorite_indexes() -> [IndexCreateStatement; 2] {
    [
        Index::create()
            .if_not_exists()
            .unique()
            .name("favorites_user_planet_idx")
            .table(Favorites)
            .col(favorites::Column::UserId)
            .col(favorites::Column::PlanetId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .unique()
            .name("favorites_user_character_idx")
            .table(Favorites)
            .col(favorites::Column::UserId)
            .col(favorites::Column::CharacterId)
            .to_owned(),
    ]
}
