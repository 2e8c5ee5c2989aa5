use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use starwars_api::api::{self, middleware::RequestId, openapi::ApiDoc};
use starwars_api::app_state::AppState;
use starwars_api::config::Config;
use starwars_api::database::{self, connector::redact_url};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let db_settings = config
        .database_settings()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("Connecting to database at {}", redact_url(&db_settings.url));
    let db = database::connect_with_settings(&db_settings).await?;

    let state = web::Data::new(AppState::new(db));
    let max_body_bytes = config.effective_max_body_bytes();
    let host = config.host.clone();
    let port = config.port;

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!(
        "Swagger UI available at http://{}:{}/swagger-ui/index.html",
        host,
        port
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .wrap(RequestId)
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(api::configure(max_body_bytes))
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
