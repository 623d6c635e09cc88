use argon2::{
    Argon2, PasswordHasher,
    password_hash::{rand_core::OsRng, SaltString},
};
use axum_starwars_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Characters, Planets, Users, characters, planets, users},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use sea_orm::ActiveValue::NotSet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure the schema exists.
    run_migrations(&orm).await?;

    let luke = ensure_user(&orm, "luke@rebels.org", "tatooine").await?;
    let leia = ensure_user(&orm, "leia@rebels.org", "alderaan").await?;
    seed_planets(&orm).await?;
    seed_characters(&orm).await?;

    println!("Seed completed. User IDs: {luke}, {leia}");
    Ok(())
}

async fn ensure_user(orm: &DatabaseConnection, email: &str, password: &str) -> anyhow::Result<i32> {
    if let Some(existing) = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already present");
        return Ok(existing.id);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let user = users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        password: Set(password_hash),
        is_active: Set(true),
    }
    .insert(orm)
    .await?;

    println!("Ensured user {email}");
    Ok(user.id)
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Planets::find().count(orm).await? > 0 {
        println!("Planets already seeded");
        return Ok(());
    }

    let planets = vec![
        ("Tatooine", 10465, "1 standard"),
        ("Alderaan", 12500, "1 standard"),
        ("Hoth", 7200, "1.1 standard"),
        ("Dagobah", 8900, "N/A"),
    ];

    for (name, size, gravity) in planets {
        planets::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            size: Set(size),
            gravity: Set(gravity.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded planets");
    Ok(())
}

async fn seed_characters(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Characters::find().count(orm).await? > 0 {
        println!("Characters already seeded");
        return Ok(());
    }

    let people = vec![
        ("Luke Skywalker", 19),
        ("Leia Organa", 19),
        ("Han Solo", 29),
        ("Yoda", 896),
    ];

    for (name, age) in people {
        characters::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            age: Set(age),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded characters");
    Ok(())
}
