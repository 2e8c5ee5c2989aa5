use sea_orm::sea_query::Table;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};

use super::connector::DB;
use super::entities::{favoritos, personaje, planeta, usuario};

/// Table names in creation order; `favoritos` references `usuario`.
pub const TABLES: [&str; 4] = ["usuario", "personaje", "planeta", "favoritos"];

async fn create_table<E>(db: &DB, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    log::debug!("Ensured table {}", entity.table_name());
    Ok(())
}

async fn drop_table<E>(db: &DB, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let stmt = Table::drop().table(entity).if_exists().to_owned();
    db.execute(backend.build(&stmt)).await?;
    log::debug!("Dropped table {}", entity.table_name());
    Ok(())
}

/// Creates the four tables when they are missing.
pub async fn create_schema(db: &DB) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());
    create_table(db, &schema, usuario::Entity).await?;
    create_table(db, &schema, personaje::Entity).await?;
    create_table(db, &schema, planeta::Entity).await?;
    create_table(db, &schema, favoritos::Entity).await?;
    Ok(())
}

/// Drops the four tables, dependents first.
pub async fn drop_schema(db: &DB) -> Result<(), DbErr> {
    drop_table(db, favoritos::Entity).await?;
    drop_table(db, planeta::Entity).await?;
    drop_table(db, personaje::Entity).await?;
    drop_table(db, usuario::Entity).await?;
    Ok(())
}
