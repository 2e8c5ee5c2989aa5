use actix_web::{error::JsonPayloadError, http::StatusCode, web};

use crate::errors::AppError;

pub mod favoritos;
pub mod middleware;
pub mod openapi;
pub mod personajes;
pub mod planetas;
pub mod sitemap;
pub mod usuarios;
pub mod validation;

/// JSON extractor settings: body limit and `{ "message" }` shaped rejections.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let app_err = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    AppError::api(err.to_string()).with_status(StatusCode::PAYLOAD_TOO_LARGE)
                }
                _ => AppError::BadRequest(format!("Invalid JSON body: {}", err)),
            };
            app_err.into()
        })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid path parameter: {}", err)).into()
    })
}

/// Registers every route of the service plus extractor configuration.
pub fn configure(max_body_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config(max_body_bytes))
            .app_data(path_config())
            .service(sitemap::sitemap)
            .configure(personajes::init_routes)
            .configure(planetas::init_routes)
            .configure(usuarios::init_routes)
            .configure(favoritos::init_routes);
    }
}
