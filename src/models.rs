//! Transport-facing records. Each one serializes to a flat JSON object.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::database::entities::{favoritos, personaje, planeta, usuario};

// --- User ---
#[derive(Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Never leaves the process.
    #[serde(skip)]
    pub password: String,
    pub genero: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("genero", &self.genero)
            .finish()
    }
}

impl From<usuario::Model> for User {
    fn from(m: usuario::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            password: m.password,
            genero: m.genero,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub genero: String,
}

// --- Character ---
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub hair_color: String,
    pub birth_year: String,
    pub height: i32,
    pub mass: i32,
}

impl From<personaje::Model> for Character {
    fn from(m: personaje::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            gender: m.gender,
            hair_color: m.hair_color,
            birth_year: m.birth_year,
            height: m.height,
            mass: m.mass,
        }
    }
}

// --- Planet ---
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub gravity: String,
    pub population: i64,
    pub climate: String,
}

impl From<planeta::Model> for Planet {
    fn from(m: planeta::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            diameter: m.diameter,
            rotation_period: m.rotation_period,
            orbital_period: m.orbital_period,
            gravity: m.gravity,
            population: m.population,
            climate: m.climate,
        }
    }
}

// --- Favorite ---
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub personaje_name: String,
    pub planeta_name: String,
    pub usuario_id: Option<i32>,
}

impl From<favoritos::Model> for Favorite {
    fn from(m: favoritos::Model) -> Self {
        Self {
            id: m.id,
            personaje_name: m.personaje_name,
            planeta_name: m.planeta_name,
            usuario_id: m.usuario_id,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewFavorite {
    pub personaje_name: String,
    pub planeta_name: String,
    pub usuario_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_serialization_omits_password() {
        let user = User {
            id: 1,
            name: "Leia".into(),
            email: "leia@alderaan.org".into(),
            password: "hunter2".into(),
            genero: "female".into(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Leia", "email": "leia@alderaan.org", "genero": "female"})
        );
        assert!(!format!("{:?}", user).contains("hunter2"));
    }

    #[test]
    fn favorite_serializes_owner_id() {
        let fav = Favorite::from(favoritos::Model {
            id: 7,
            personaje_name: "Luke Skywalker".into(),
            planeta_name: "Tatooine".into(),
            usuario_id: Some(3),
        });

        let value = serde_json::to_value(&fav).unwrap();
        assert_eq!(value["usuario_id"], json!(3));
        assert_eq!(value["personaje_name"], json!("Luke Skywalker"));
        assert!(value.get("usuario_name").is_none());
    }

    #[test]
    fn planet_keeps_every_stored_field() {
        let planet = Planet::from(planeta::Model {
            id: 1,
            name: "Coruscant".into(),
            diameter: 12240,
            rotation_period: 24,
            orbital_period: 368,
            gravity: "1 standard".into(),
            population: 1_000_000_000_000,
            climate: "temperate".into(),
        });

        let value = serde_json::to_value(&planet).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "name",
            "diameter",
            "rotation_period",
            "orbital_period",
            "gravity",
            "population",
            "climate",
        ] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert_eq!(obj.len(), 8);
    }
}
