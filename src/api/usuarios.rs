use actix_web::{HttpResponse, get, web};

use crate::{
    app_state::AppState,
    database::{FavoriteRepository, UserRepository},
    errors::AppError,
    models::{Favorite, User},
};

/// Lists users. Passwords are never part of the payload.
#[utoipa::path(
    get,
    path = "/usuario",
    tag = "Usuarios",
    responses(
        (status = 200, description = "All users, without passwords", body = [User])
    )
)]
#[get("")]
pub async fn get_usuarios(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let usuarios = app_state.store.list_users().await?;
    log::debug!("Listing {} usuarios", usuarios.len());
    Ok(HttpResponse::Ok().json(usuarios))
}

/// An unknown user simply has no favorites: the answer is an empty list, not a 404.
#[utoipa::path(
    get,
    path = "/usuario/{usuario_id}/favoritos",
    tag = "Usuarios",
    params(
        ("usuario_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites owned by the user", body = [Favorite])
    )
)]
#[get("/{usuario_id}/favoritos")]
pub async fn get_favoritos(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let usuario_id = path.into_inner();
    let favoritos = app_state.store.list_favorites_by_user(usuario_id).await?;
    log::debug!("usuario {} has {} favoritos", usuario_id, favoritos.len());
    Ok(HttpResponse::Ok().json(favoritos))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/usuario")
            .service(get_usuarios)
            .service(get_favoritos),
    );
}
