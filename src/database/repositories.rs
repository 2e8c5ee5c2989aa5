use std::future::Future;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use thiserror::Error;

use super::connector::DB;
use super::entities::{favoritos, personaje, planeta, usuario};
use crate::models::{Character, Favorite, NewFavorite, NewUser, Planet, User};

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

pub type RepoResult<T> = Result<T, RepoError>;

pub trait CharacterRepository {
    fn list_characters(&self) -> impl Future<Output = RepoResult<Vec<Character>>> + Send;
    fn get_character(&self, id: i32) -> impl Future<Output = RepoResult<Character>> + Send;
}

pub trait PlanetRepository {
    fn list_planets(&self) -> impl Future<Output = RepoResult<Vec<Planet>>> + Send;
    fn get_planet(&self, id: i32) -> impl Future<Output = RepoResult<Planet>> + Send;
}

pub trait UserRepository {
    fn list_users(&self) -> impl Future<Output = RepoResult<Vec<User>>> + Send;
    fn get_user(&self, id: i32) -> impl Future<Output = RepoResult<User>> + Send;
    fn create_user(&self, user: NewUser) -> impl Future<Output = RepoResult<User>> + Send;
}

pub trait FavoriteRepository {
    /// Favorites owned by `usuario_id`, possibly none.
    fn list_favorites_by_user(
        &self,
        usuario_id: i32,
    ) -> impl Future<Output = RepoResult<Vec<Favorite>>> + Send;
    fn get_favorite(&self, id: i32) -> impl Future<Output = RepoResult<Favorite>> + Send;
    fn create_favorite(
        &self,
        favorite: NewFavorite,
    ) -> impl Future<Output = RepoResult<Favorite>> + Send;
    fn delete_favorite(&self, id: i32) -> impl Future<Output = RepoResult<()>> + Send;
}

/// All repositories over one SeaORM connection pool.
#[derive(Clone, Debug)]
pub struct SeaOrmStore {
    db: DB,
}

impl SeaOrmStore {
    pub fn new(db: DB) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DB {
        &self.db
    }
}

impl CharacterRepository for SeaOrmStore {
    async fn list_characters(&self) -> RepoResult<Vec<Character>> {
        let rows = personaje::Entity::find()
            .order_by_asc(personaje::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Character::from).collect())
    }

    async fn get_character(&self, id: i32) -> RepoResult<Character> {
        personaje::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Character::from)
            .ok_or(RepoError::NotFound { entity: "personaje", id })
    }
}

impl PlanetRepository for SeaOrmStore {
    async fn list_planets(&self) -> RepoResult<Vec<Planet>> {
        let rows = planeta::Entity::find()
            .order_by_asc(planeta::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn get_planet(&self, id: i32) -> RepoResult<Planet> {
        planeta::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Planet::from)
            .ok_or(RepoError::NotFound { entity: "planeta", id })
    }
}

impl UserRepository for SeaOrmStore {
    async fn list_users(&self) -> RepoResult<Vec<User>> {
        let rows = usuario::Entity::find()
            .order_by_asc(usuario::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, id: i32) -> RepoResult<User> {
        usuario::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(RepoError::NotFound { entity: "usuario", id })
    }

    async fn create_user(&self, user: NewUser) -> RepoResult<User> {
        let created = usuario::ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
            genero: Set(user.genero),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(created.into())
    }
}

impl FavoriteRepository for SeaOrmStore {
    async fn list_favorites_by_user(&self, usuario_id: i32) -> RepoResult<Vec<Favorite>> {
        let rows = favoritos::Entity::find()
            .filter(favoritos::Column::UsuarioId.eq(usuario_id))
            .order_by_asc(favoritos::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Favorite::from).collect())
    }

    async fn get_favorite(&self, id: i32) -> RepoResult<Favorite> {
        favoritos::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Favorite::from)
            .ok_or(RepoError::NotFound { entity: "favoritos", id })
    }

    async fn create_favorite(&self, favorite: NewFavorite) -> RepoResult<Favorite> {
        let txn = self.db.begin().await?;
        let created = favoritos::ActiveModel {
            personaje_name: Set(favorite.personaje_name),
            planeta_name: Set(favorite.planeta_name),
            usuario_id: Set(favorite.usuario_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;
        Ok(created.into())
    }

    async fn delete_favorite(&self, id: i32) -> RepoResult<()> {
        let result = favoritos::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound { entity: "favoritos", id });
        }
        Ok(())
    }
}
