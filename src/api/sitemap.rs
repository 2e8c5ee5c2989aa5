use actix_web::{HttpRequest, HttpResponse, get};
use serde::Serialize;
use utoipa::openapi::path::PathItem;
use utoipa::{OpenApi, ToSchema};

use crate::api::openapi::ApiDoc;

/// Served by the Swagger UI service rather than an OpenAPI-described handler.
const DOC_ROUTES: &[(&str, &str)] = &[
    ("GET", "/swagger-ui/index.html"),
    ("GET", "/api-docs/openapi.json"),
];

lazy_static::lazy_static! {
    /// (method, path) for every documented handler, then the doc routes.
    pub static ref ROUTES: Vec<(&'static str, String)> = collect_routes(&ApiDoc::openapi());
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}

pub fn collect_routes(doc: &utoipa::openapi::OpenApi) -> Vec<(&'static str, String)> {
    let mut routes: Vec<(&'static str, String)> = doc
        .paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            methods(item)
                .into_iter()
                .map(move |method| (method, path.clone()))
        })
        .collect();
    routes.extend(
        DOC_ROUTES
            .iter()
            .map(|&(method, path)| (method, path.to_string())),
    );
    routes
}

#[derive(Serialize, ToSchema)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    pub url: String,
}

#[derive(Serialize, ToSchema)]
pub struct Sitemap {
    pub message: String,
    pub endpoints: Vec<Endpoint>,
}

pub fn build_sitemap(scheme: &str, host: &str) -> Sitemap {
    let endpoints = ROUTES
        .iter()
        .map(|(method, path)| Endpoint {
            method: method.to_string(),
            path: path.clone(),
            url: format!("{}://{}{}", scheme, host, path),
        })
        .collect();

    Sitemap {
        message: "Star Wars API: available endpoints".to_string(),
        endpoints,
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Sitemap",
    responses(
        (status = 200, description = "Map of every available route", body = Sitemap)
    )
)]
#[get("/")]
pub async fn sitemap(req: HttpRequest) -> HttpResponse {
    let conn = req.connection_info();
    HttpResponse::Ok().json(build_sitemap(conn.scheme(), conn.host()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(map: &Sitemap, method: &str, path: &str) -> bool {
        map.endpoints
            .iter()
            .any(|e| e.method == method && e.path == path)
    }

    #[test]
    fn lists_every_documented_operation() {
        let map = build_sitemap("http", "localhost:3000");
        let doc = ApiDoc::openapi();
        for (path, item) in doc.paths.paths.iter() {
            for method in methods(item) {
                assert!(has(&map, method, path), "missing {} {}", method, path);
            }
        }
        assert_eq!(map.endpoints.len(), ROUTES.len());
    }

    #[test]
    fn carries_methods_and_absolute_urls() {
        let map = build_sitemap("http", "localhost:3000");
        assert!(has(&map, "GET", "/personaje"));
        assert!(has(&map, "POST", "/add_favoritos/{usuario_id}"));
        assert!(has(&map, "DELETE", "/del_favoritos/{favoritos_id}"));
        assert!(!has(&map, "GET", "/add_favoritos/{usuario_id}"));
        assert!(has(&map, "GET", "/swagger-ui/index.html"));
        assert!(map
            .endpoints
            .iter()
            .any(|e| e.url == "http://localhost:3000/personaje"));
    }
}
