use actix_web::{HttpResponse, delete, post, web};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    app_state::AppState,
    database::FavoriteRepository,
    errors::AppError,
    models::NewFavorite,
};

pub const ADDED_MESSAGE: &str = "Favorito agregado";
pub const DELETED_MESSAGE: &str = "Eliminado";

// --- DTOs ---

/// Both keys are required; names are free text and not checked against the catalogues.
#[derive(Deserialize, ToSchema, Clone, Debug)]
pub struct AddFavoritoDto {
    pub planeta_name: Option<String>,
    pub personaje_name: Option<String>,
}

impl AddFavoritoDto {
    /// Only a JSON object is accepted; a positional array never maps onto the names.
    fn from_object(body: Map<String, Value>) -> Result<Self, AppError> {
        serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    }

    fn into_new_favorite(self, usuario_id: i32) -> Result<NewFavorite, AppError> {
        match (self.planeta_name, self.personaje_name) {
            (Some(planeta_name), Some(personaje_name)) => Ok(NewFavorite {
                personaje_name,
                planeta_name,
                usuario_id: Some(usuario_id),
            }),
            (planeta_name, personaje_name) => {
                let mut missing = Vec::new();
                if planeta_name.is_none() {
                    missing.push("planeta_name");
                }
                if personaje_name.is_none() {
                    missing.push("personaje_name");
                }
                Err(AppError::api(format!("Faltan campos requeridos: {}", missing.join(", ")))
                    .with_field("missing", missing))
            }
        }
    }
}

// --- Route Handlers ---

#[utoipa::path(
    post,
    path = "/add_favoritos/{usuario_id}",
    tag = "Favoritos",
    params(
        ("usuario_id" = i32, Path, description = "Owner user ID (not checked)")
    ),
    request_body = AddFavoritoDto,
    responses(
        (status = 200, description = "Favorite created", body = String),
        (status = 400, description = "planeta_name or personaje_name missing")
    )
)]
#[post("/add_favoritos/{usuario_id}")]
pub async fn add_favorito(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let usuario_id = path.into_inner();
    let new_favorite =
        AddFavoritoDto::from_object(body.into_inner())?.into_new_favorite(usuario_id)?;

    let created = app_state.store.create_favorite(new_favorite).await?;
    log::info!("Created favorito {} for usuario {}", created.id, usuario_id);

    Ok(HttpResponse::Ok().json(ADDED_MESSAGE))
}

#[utoipa::path(
    delete,
    path = "/del_favoritos/{favoritos_id}",
    tag = "Favoritos",
    params(
        ("favoritos_id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = String),
        (status = 404, description = "Favorite not found")
    )
)]
#[delete("/del_favoritos/{favoritos_id}")]
pub async fn del_favorito(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let favoritos_id = path.into_inner();
    app_state
        .store
        .delete_favorite(favoritos_id)
        .await
        .map_err(|e| AppError::not_found_or(e, "Favorito no encontrado"))?;
    log::info!("Deleted favorito {}", favoritos_id);

    Ok(HttpResponse::Ok().json(DELETED_MESSAGE))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(add_favorito).service(del_favorito);
}
