use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use moviedb_core::DomainError;
use moviedb_infra::StoreError;

use crate::app::headers::AlertHeaders;

/// Failure of a movie operation, before it is mapped to HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(DomainError::InvalidArgument {
                entity,
                key,
                message,
            }) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": key.as_str(),
                    "message": message,
                    "entity": entity,
                })),
            )
                .into_response(),
            ApiError::Domain(DomainError::InvalidId(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "invalid_id", msg)
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "movie store failure");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
            }
        }
    }
}

/// Map an error to a response, attaching the failure alert headers for
/// rejected arguments.
pub fn api_error_to_response(err: ApiError, alerts: &AlertHeaders) -> Response {
    let headers = match &err {
        ApiError::Domain(DomainError::InvalidArgument { entity, key, .. }) => {
            alerts.failure(entity, *key)
        }
        _ => HeaderMap::new(),
    };
    (headers, err).into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
