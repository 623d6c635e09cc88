mod common;

use axum_starwars_api::{
    entity::favorites::ActiveModel as FavoriteActive,
    error::AppError,
    models::FavoriteTarget,
    services::{character_service, favorite_service, planet_service},
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};

use common::{create_character, create_planet, create_user, setup_shared_state, setup_state};

#[tokio::test]
async fn adding_the_same_planet_twice_conflicts() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Tatooine").await?;

    let favorite = favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await?;
    assert_eq!(favorite.user_id, user_id);
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));

    let second = favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await;
    match second {
        Err(AppError::Conflict(message)) => assert_eq!(
            message,
            format!("Planet {} is already a favorite planet of user {user_id}", planet.id)
        ),
        other => panic!("expected conflict, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn adding_the_same_character_twice_conflicts() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "leia@rebels.org").await?;
    let character = create_character(&state, "Han Solo").await?;

    favorite_service::add_favorite_character(&state.orm, user_id, character.id).await?;
    let second =
        favorite_service::add_favorite_character(&state.orm, user_id, character.id).await;
    assert!(matches!(second, Err(AppError::Conflict(_))));

    Ok(())
}

#[tokio::test]
async fn planet_and_character_with_the_same_id_are_distinct_favorites() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Hoth").await?;
    let character = create_character(&state, "Yoda").await?;
    assert_eq!(planet.id, character.id);

    favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await?;
    favorite_service::add_favorite_character(&state.orm, user_id, character.id).await?;

    favorite_service::remove_favorite_planet(&state.orm, user_id, planet.id).await?;

    let remaining = favorite_service::list_all_favorites(&state.orm).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].target, FavoriteTarget::Character(character.id));

    Ok(())
}

#[tokio::test]
async fn different_users_may_share_a_favorite() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let luke = create_user(&state, "luke@rebels.org").await?;
    let leia = create_user(&state, "leia@rebels.org").await?;
    let planet = create_planet(&state, "Alderaan").await?;

    favorite_service::add_favorite_planet(&state.orm, luke, planet.id).await?;
    favorite_service::add_favorite_planet(&state.orm, leia, planet.id).await?;

    assert_eq!(favorite_service::list_all_favorites(&state.orm).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn adding_requires_existing_user_and_target() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Dagobah").await?;

    let missing_user = favorite_service::add_favorite_planet(&state.orm, 999, planet.id).await;
    assert!(
        matches!(missing_user, Err(AppError::NotFound(ref m)) if m == "User cannot be found")
    );

    let missing_planet = favorite_service::add_favorite_planet(&state.orm, user_id, 999).await;
    assert!(
        matches!(missing_planet, Err(AppError::NotFound(ref m)) if m == "Planet cannot be found")
    );

    let missing_character =
        favorite_service::add_favorite_character(&state.orm, user_id, 999).await;
    assert!(
        matches!(missing_character, Err(AppError::NotFound(ref m)) if m == "Character cannot be found")
    );

    // Nothing was written by the failed attempts.
    assert!(favorite_service::list_all_favorites(&state.orm).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn removing_succeeds_exactly_once() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Tatooine").await?;
    let character = create_character(&state, "Luke Skywalker").await?;

    favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await?;
    favorite_service::add_favorite_character(&state.orm, user_id, character.id).await?;

    favorite_service::remove_favorite_planet(&state.orm, user_id, planet.id).await?;
    let again = favorite_service::remove_favorite_planet(&state.orm, user_id, planet.id).await;
    match again {
        Err(AppError::NotFound(message)) => assert_eq!(
            message,
            format!("Planet {} is not a favorite planet of user {user_id}", planet.id)
        ),
        other => panic!("expected not found, got {other:?}"),
    }

    favorite_service::remove_favorite_character(&state.orm, user_id, character.id).await?;
    let again =
        favorite_service::remove_favorite_character(&state.orm, user_id, character.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    // A removed favorite can be added again.
    favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await?;
    Ok(())
}

#[tokio::test]
async fn user_favorites_resolve_full_records() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let other_user = create_user(&state, "han@smugglers.org").await?;
    let tatooine = create_planet(&state, "Tatooine").await?;
    let hoth = create_planet(&state, "Hoth").await?;
    let yoda = create_character(&state, "Yoda").await?;

    favorite_service::add_favorite_planet(&state.orm, user_id, hoth.id).await?;
    favorite_service::add_favorite_planet(&state.orm, user_id, tatooine.id).await?;
    favorite_service::add_favorite_character(&state.orm, user_id, yoda.id).await?;
    favorite_service::add_favorite_planet(&state.orm, other_user, tatooine.id).await?;

    let favorites = favorite_service::list_favorites_for_user(&state.orm, user_id).await?;
    assert_eq!(favorites.user_id, user_id);
    assert_eq!(favorites.planets, vec![hoth, tatooine]);
    assert_eq!(favorites.people, vec![yoda]);

    Ok(())
}

#[tokio::test]
async fn user_favorites_of_unknown_user_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let result = favorite_service::list_favorites_for_user(&state.orm, 42).await;
    assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == "User 42 cannot be found"));

    let user_id = create_user(&state, "luke@rebels.org").await?;
    let empty = favorite_service::list_favorites_for_user(&state.orm, user_id).await?;
    assert!(empty.planets.is_empty());
    assert!(empty.people.is_empty());

    Ok(())
}

#[tokio::test]
async fn all_favorites_are_flat_records() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Tatooine").await?;
    let character = create_character(&state, "Leia Organa").await?;

    favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await?;
    favorite_service::add_favorite_character(&state.orm, user_id, character.id).await?;

    let all = favorite_service::list_all_favorites(&state.orm).await?;
    let json = serde_json::to_value(&all)?;
    assert_eq!(
        json,
        serde_json::json!([
            { "id": all[0].id, "user_id": user_id, "planet_id": planet.id },
            { "id": all[1].id, "user_id": user_id, "people_id": character.id },
        ])
    );

    Ok(())
}

#[tokio::test]
async fn malformed_rows_are_skipped_when_listing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Tatooine").await?;
    let character = create_character(&state, "Luke Skywalker").await?;

    // Written around the manager: points at both targets.
    FavoriteActive {
        id: NotSet,
        user_id: Set(user_id),
        planet_id: Set(Some(planet.id)),
        character_id: Set(Some(character.id)),
    }
    .insert(&state.orm)
    .await?;

    assert!(favorite_service::list_all_favorites(&state.orm).await?.is_empty());
    let favorites = favorite_service::list_favorites_for_user(&state.orm, user_id).await?;
    assert!(favorites.planets.is_empty());
    assert!(favorites.people.is_empty());

    Ok(())
}

#[tokio::test]
async fn unique_index_rejects_duplicates_written_around_the_manager() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Tatooine").await?;

    favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await?;

    let duplicate = FavoriteActive {
        id: NotSet,
        user_id: Set(user_id),
        planet_id: Set(Some(planet.id)),
        character_id: Set(None),
    }
    .insert(&state.orm)
    .await;

    let err = duplicate.expect_err("unique index should reject the duplicate");
    let mapped = AppError::from_insert(err, || "duplicate".to_string());
    assert!(matches!(mapped, AppError::Conflict(ref m) if m == "duplicate"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_adds_admit_one_row_and_report_conflicts() -> anyhow::Result<()> {
    let state = setup_shared_state("racing-adds").await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;

    for round in 0..10 {
        let planet_id = create_planet(&state, &format!("Planet {round}")).await?.id;

        let mut handles = Vec::new();
        for _ in 0..4 {
            let orm = state.orm.clone();
            handles.push(tokio::spawn(async move {
                favorite_service::add_favorite_planet(&orm, user_id, planet_id).await
            }));
        }

        let mut added = 0;
        for handle in handles {
            match handle.await? {
                Ok(_) => added += 1,
                Err(AppError::Conflict(_)) => {}
                Err(other) => panic!("round {round}: expected conflict, got {other:?}"),
            }
        }
        assert_eq!(added, 1, "round {round}");
    }

    assert_eq!(favorite_service::list_all_favorites(&state.orm).await?.len(), 10);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_removes_succeed_once() -> anyhow::Result<()> {
    let state = setup_shared_state("racing-removes").await?;
    let user_id = create_user(&state, "leia@rebels.org").await?;
    let character_id = create_character(&state, "Chewbacca").await?.id;
    favorite_service::add_favorite_character(&state.orm, user_id, character_id).await?;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let orm = state.orm.clone();
        handles.push(tokio::spawn(async move {
            favorite_service::remove_favorite_character(&orm, user_id, character_id).await
        }));
    }

    let mut removed = 0;
    for handle in handles {
        match handle.await? {
            Ok(()) => removed += 1,
            Err(AppError::NotFound(_)) => {}
            Err(other) => panic!("expected not found, got {other:?}"),
        }
    }
    assert_eq!(removed, 1);
    assert!(favorite_service::list_all_favorites(&state.orm).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_targets_removes_their_favorites() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user_id = create_user(&state, "luke@rebels.org").await?;
    let planet = create_planet(&state, "Alderaan").await?;
    let keep = create_planet(&state, "Hoth").await?;
    let character = create_character(&state, "Obi-Wan Kenobi").await?;

    favorite_service::add_favorite_planet(&state.orm, user_id, planet.id).await?;
    favorite_service::add_favorite_planet(&state.orm, user_id, keep.id).await?;
    favorite_service::add_favorite_character(&state.orm, user_id, character.id).await?;

    planet_service::delete_planet(&state.orm, planet.id).await?;
    character_service::delete_character(&state.orm, character.id).await?;

    let all = favorite_service::list_all_favorites(&state.orm).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].target, FavoriteTarget::Planet(keep.id));

    let missing = planet_service::delete_planet(&state.orm, planet.id).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
