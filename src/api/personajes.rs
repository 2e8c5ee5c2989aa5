use actix_web::{HttpResponse, get, web};

use crate::{
    app_state::AppState, database::CharacterRepository, errors::AppError, models::Character,
};

#[utoipa::path(
    get,
    path = "/personaje",
    tag = "Personajes",
    responses(
        (status = 200, description = "All characters", body = [Character])
    )
)]
#[get("")]
pub async fn get_personajes(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let personajes = app_state.store.list_characters().await?;
    log::debug!("Listing {} personajes", personajes.len());
    Ok(HttpResponse::Ok().json(personajes))
}

#[utoipa::path(
    get,
    path = "/personaje/{personaje_id}",
    tag = "Personajes",
    params(
        ("personaje_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character found", body = Character),
        (status = 404, description = "Character not found")
    )
)]
#[get("/{personaje_id}")]
pub async fn get_personaje(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let personaje_id = path.into_inner();
    let personaje = app_state
        .store
        .get_character(personaje_id)
        .await
        .map_err(|e| AppError::not_found_or(e, "El personaje no esta registrado"))?;
    log::debug!("Found personaje {} ({})", personaje.id, personaje.name);
    Ok(HttpResponse::Ok().json(personaje))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/personaje")
            .service(get_personajes)
            .service(get_personaje),
    );
}
