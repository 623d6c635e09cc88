use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::{characters, favorites, planets, users};

/// Public view of a user. The stored password never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub size: i32,
    pub gravity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// What a favorite points at. Serialized as `{"planet_id": n}` or `{"people_id": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum FavoriteTarget {
    #[serde(rename = "planet_id")]
    Planet(i32),
    #[serde(rename = "people_id")]
    Character(i32),
}

impl FavoriteTarget {
    pub fn id(&self) -> i32 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Character(id) => *id,
        }
    }

    /// Capitalized kind name used in user-facing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "Planet",
            FavoriteTarget::Character(_) => "Character",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "planet",
            FavoriteTarget::Character(_) => "character",
        }
    }

    pub fn planet_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::Planet(id) => Some(*id),
            FavoriteTarget::Character(_) => None,
        }
    }

    pub fn character_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::Planet(_) => None,
            FavoriteTarget::Character(id) => Some(*id),
        }
    }
}

/// A favorite row, flattened into `{id, user_id, planet_id}` or `{id, user_id, people_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    #[serde(flatten)]
    pub target: FavoriteTarget,
}

/// Stored row that points at both a planet and a character, or at neither.
#[derive(Debug, thiserror::Error)]
#[error("favorite {id} does not reference exactly one target")]
pub struct InvalidFavoriteRow {
    pub id: i32,
}

impl TryFrom<favorites::Model> for Favorite {
    type Error = InvalidFavoriteRow;

    fn try_from(model: favorites::Model) -> Result<Self, Self::Error> {
        let target = match (model.planet_id, model.character_id) {
            (Some(planet_id), None) => FavoriteTarget::Planet(planet_id),
            (None, Some(character_id)) => FavoriteTarget::Character(character_id),
            _ => return Err(InvalidFavoriteRow { id: model.id }),
        };
        Ok(Favorite {
            id: model.id,
            user_id: model.user_id,
            target,
        })
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Planet {
            id: model.id,
            name: model.name,
            size: model.size,
            gravity: model.gravity,
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Character {
            id: model.id,
            name: model.name,
            age: model.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(planet_id: Option<i32>, character_id: Option<i32>) -> favorites::Model {
        favorites::Model {
            id: 7,
            user_id: 1,
            planet_id,
            character_id,
        }
    }

    #[test]
    fn planet_row_becomes_planet_target() {
        let favorite = Favorite::try_from(row(Some(5), None)).unwrap();
        assert_eq!(favorite.target, FavoriteTarget::Planet(5));
        assert_eq!(favorite.target.planet_id(), Some(5));
        assert_eq!(favorite.target.character_id(), None);
    }

    #[test]
    fn rows_without_exactly_one_target_are_rejected() {
        assert!(Favorite::try_from(row(Some(5), Some(3))).is_err());
        assert!(Favorite::try_from(row(None, None)).is_err());
    }

    #[test]
    fn favorites_serialize_flat() {
        let planet = Favorite::try_from(row(Some(5), None)).unwrap();
        assert_eq!(
            serde_json::to_value(&planet).unwrap(),
            serde_json::json!({ "id": 7, "user_id": 1, "planet_id": 5 })
        );

        let character = Favorite::try_from(row(None, Some(3))).unwrap();
        assert_eq!(
            serde_json::to_value(&character).unwrap(),
            serde_json::json!({ "id": 7, "user_id": 1, "people_id": 3 })
        );
    }

    #[test]
    fn user_view_hides_password() {
        let user = User::from(users::Model {
            id: 1,
            email: "luke@rebels.org".into(),
            password: "secret".into(),
            is_active: true,
        });
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "luke@rebels.org");
    }
}
