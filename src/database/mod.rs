pub mod connector;
pub mod entities;
pub mod repositories;
pub mod schema;
pub mod seed;

// Re-export the primary DB types for convenient access as `database::connect_with_settings()`
pub use connector::{DB, connect_with_settings, ping};
pub use repositories::{
    CharacterRepository, FavoriteRepository, PlanetRepository, RepoError, RepoResult,
    SeaOrmStore, UserRepository,
};
pub use schema::{create_schema, drop_schema};
pub use seed::seed_reference_data;
