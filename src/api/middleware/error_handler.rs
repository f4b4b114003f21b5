//! Error handler for converting AppError to HTTP responses.
//!
//! Handlers return [`AppError`]; this module is the single place where error
//! kinds become status codes and the standard JSON envelope.

use axum::{
    Json,
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::api::middleware::RequestId;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let error_response = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::not_found_error(entity, field, value),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => ErrorResponse::duplicate_error(entity, field, value),
            AppError::Validation { field, reason } => ErrorResponse::validation_error(field, reason),
            AppError::ValidationErrors { errors } => {
                ErrorResponse::new("VALIDATION_ERROR", "Request validation failed")
                    .with_details(json!({ "errors": errors }))
            }
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
            AppError::UnprocessableContent { message } => {
                ErrorResponse::new("UNPROCESSABLE_CONTENT", message)
            }
            AppError::Database { operation, .. } => ErrorResponse::new(
                "DATABASE_ERROR",
                &format!("Database operation failed: {}", operation),
            ),
            AppError::Decode { operation, .. } => ErrorResponse::new(
                "DECODE_ERROR",
                &format!("Failed to read stored data during {}", operation),
            ),
            AppError::Configuration { key, .. } => ErrorResponse::new(
                "CONFIGURATION_ERROR",
                &format!("Configuration error: {}", key),
            ),
            AppError::Internal { .. } => {
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::UnprocessableContent { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. }
        | AppError::Decode { .. }
        | AppError::Configuration { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn default_error(status: StatusCode) -> (&'static str, &'static str) {
    match status {
        StatusCode::BAD_REQUEST => ("BAD_REQUEST", "Bad request"),
        StatusCode::NOT_FOUND => ("NOT_FOUND", "The requested resource was not found"),
        StatusCode::METHOD_NOT_ALLOWED => (
            "METHOD_NOT_ALLOWED",
            "HTTP method not allowed for this endpoint",
        ),
        StatusCode::PAYLOAD_TOO_LARGE => ("PAYLOAD_TOO_LARGE", "Request payload too large"),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ("UNSUPPORTED_MEDIA_TYPE", "Unsupported media type"),
        StatusCode::REQUEST_TIMEOUT => ("REQUEST_TIMEOUT", "Request timeout"),
        StatusCode::SERVICE_UNAVAILABLE => {
            ("SERVICE_UNAVAILABLE", "Service temporarily unavailable")
        }
        s if s.is_server_error() => ("INTERNAL_SERVER_ERROR", "An internal server error occurred"),
        _ => ("UNKNOWN_ERROR", "An unknown error occurred"),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Rewrites error responses into the standard envelope.
///
/// Responses produced by the router itself (unknown route, wrong method)
/// carry a plain-text body; they are converted here. JSON error bodies get
/// the request id attached.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().map(|id| id.0.clone());
    let response = next.run(request).await;
    let status = response.status();

    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    let mut error_response = if is_json(&parts.headers) {
        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(value) if value.get("code").is_some() => ErrorResponse {
                code: value["code"].as_str().unwrap_or_default().to_string(),
                message: value["message"].as_str().unwrap_or_default().to_string(),
                details: value.get("details").cloned(),
                request_id: None,
            },
            _ => {
                let (code, message) = default_error(status);
                ErrorResponse::new(code, message)
            }
        }
    } else {
        let (code, default_message) = default_error(status);
        let original = String::from_utf8_lossy(&bytes).trim().to_string();
        if original.is_empty() {
            ErrorResponse::new(code, default_message)
        } else {
            ErrorResponse::new(code, &original)
        }
    };

    if let Some(id) = request_id {
        error_response = error_response.with_request_id(&id);
    }

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.remove(header::CONTENT_TYPE);
    (parts, Json(error_response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::not_found("buyer", "id", 1), StatusCode::NOT_FOUND),
            (AppError::duplicate("buyer", "card_number_id", "1"), StatusCode::CONFLICT),
            (AppError::bad_request("bad id"), StatusCode::BAD_REQUEST),
            (
                AppError::ValidationErrors { errors: Vec::new() },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::UnprocessableContent {
                    message: "missing field".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Validation {
                    field: "zip_code".to_string(),
                    reason: "required".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Decode {
                    operation: "list buyers".to_string(),
                    source: anyhow::anyhow!("bad row"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal {
                    source: anyhow::anyhow!("boom"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error_to_status_code(&error), expected, "{:?}", error);
        }
    }

    #[tokio::test]
    async fn test_database_error_hides_source() {
        let error = AppError::Database {
            operation: "insert buyers".to_string(),
            source: anyhow::anyhow!("password authentication failed for user postgres"),
        };

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["code"], "DATABASE_ERROR");
        assert!(!json.to_string().contains("password"));
    }

    #[tokio::test]
    async fn test_validation_errors_listed_in_details() {
        let error = AppError::ValidationErrors {
            errors: vec![crate::error::ValidationFieldError {
                field: "first_name".to_string(),
                message: "must not be blank".to_string(),
            }],
        };

        let json = body_json(error.into_response()).await;
        assert_eq!(json["details"]["errors"][0]["field"], "first_name");
    }

    #[tokio::test]
    async fn test_unknown_route_becomes_json_envelope() {
        let app = Router::new()
            .route("/known", get(|| async { "ok" }))
            .layer(middleware::from_fn(global_error_handler));

        let response = app
            .oneshot(Request::builder().uri("/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_method_becomes_json_envelope() {
        let app = Router::new()
            .route("/known", get(|| async { "ok" }))
            .layer(middleware::from_fn(global_error_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/known")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["code"], "METHOD_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn test_request_id_is_attached() {
        let app = Router::new()
            .route(
                "/missing",
                get(|| async { AppError::not_found("buyer", "id", 3) }),
            )
            .layer(middleware::from_fn(global_error_handler))
            .layer(middleware::from_fn(crate::api::middleware::request_id_middleware));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["request_id"], "req-42");
        assert_eq!(json["details"]["entity"], "buyer");
    }
}
