use actix_web::{HttpResponse, get, web};

use crate::{app_state::AppState, database::PlanetRepository, errors::AppError, models::Planet};

#[utoipa::path(
    get,
    path = "/planeta",
    tag = "Planetas",
    responses(
        (status = 200, description = "All planets", body = [Planet])
    )
)]
#[get("")]
pub async fn get_planetas(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let planetas = app_state.store.list_planets().await?;
    log::debug!("Listing {} planetas", planetas.len());
    Ok(HttpResponse::Ok().json(planetas))
}

#[utoipa::path(
    get,
    path = "/planeta/{planeta_id}",
    tag = "Planetas",
    params(
        ("planeta_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet found", body = Planet),
        (status = 404, description = "Planet not found")
    )
)]
#[get("/{planeta_id}")]
pub async fn get_planeta(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let planeta = app_state
        .store
        .get_planet(path.into_inner())
        .await
        .map_err(|e| AppError::not_found_or(e, "El planeta no esta registrado"))?;
    log::debug!("Found planeta {} ({})", planeta.id, planeta.name);
    Ok(HttpResponse::Ok().json(planeta))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/planeta")
            .service(get_planetas)
            .service(get_planeta),
    );
}
