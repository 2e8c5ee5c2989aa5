use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sea_orm::DbErr;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::database::RepoError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Handler-raised error carrying its own status and extra body fields.
    #[error("{message}")]
    Api {
        message: String,
        status: StatusCode,
        payload: Map<String, Value>,
    },

    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

impl AppError {
    /// An `Api` error with the default 400 status.
    pub fn api(message: impl Into<String>) -> Self {
        AppError::Api {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
            payload: Map::new(),
        }
    }

    pub fn with_status(mut self, code: StatusCode) -> Self {
        if let AppError::Api { status, .. } = &mut self {
            *status = code;
        }
        self
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        if let AppError::Api { payload, .. } = &mut self {
            payload.insert(key.to_string(), value.into());
        }
        self
    }

    /// Maps repository absence to a 404 with `message`, anything else passes through.
    pub fn not_found_or(err: RepoError, message: &str) -> Self {
        match err {
            RepoError::NotFound { entity, id } => {
                log::warn!("{} {} not found", entity, id);
                AppError::NotFound(message.to_string())
            }
            other => other.into(),
        }
    }

    fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        match self {
            AppError::Api { payload, .. } => {
                body.extend(payload.clone());
                body.insert("message".into(), Value::String(self.to_string()));
            }
            // Store details stay in the log.
            AppError::Db(_) => {
                body.insert("message".into(), "Internal server error".into());
            }
            _ => {
                body.insert("message".into(), Value::String(self.to_string()));
            }
        }
        body
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity, id))
            }
            RepoError::Db(e) => AppError::Db(e),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Api { status, .. } => *status,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Db(e) = self {
            log::error!("Unhandled database error: {}", e);
        }
        HttpResponse::build(self.status_code()).json(Value::Object(self.body()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::json;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn api_error_defaults_to_400_and_merges_payload() {
        let err = AppError::api("Faltan campos").with_field("missing", json!(["planeta_name"]));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Faltan campos", "missing": ["planeta_name"]}));
    }

    #[actix_web::test]
    async fn api_error_payload_cannot_override_message() {
        let err = AppError::api("real")
            .with_status(StatusCode::CONFLICT)
            .with_field("message", "spoofed");
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "real");
    }

    #[actix_web::test]
    async fn not_found_maps_to_404_with_message() {
        let err = AppError::not_found_or(
            RepoError::NotFound { entity: "planeta", id: 9 },
            "El planeta no esta registrado",
        );
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "El planeta no esta registrado"}));
    }

    #[actix_web::test]
    async fn db_errors_are_opaque() {
        let err: AppError = RepoError::Db(DbErr::Custom("relation \"x\" does not exist".into())).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Internal server error"}));
    }
}
