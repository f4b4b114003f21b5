use std::error::Error as StdError;
use std::fmt::Display;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use diesel_async::pooled_connection::PoolError;
use serde::Serialize;
use thiserror::Error;

use crate::config::error::ConfigError;
use crate::error::DatabaseErrorConverter;

/// A single field failure reported by request validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type.
///
/// Repositories and services only ever return these variants; the HTTP layer
/// is the single place where they are turned into status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// No resource matched the given id or key
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// A unique key is already claimed by another live resource
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// A single field failed a semantic rule
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// One or more request fields failed validation
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Malformed request: bad JSON, wrong types, bad path or query parameters
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Well-formed request that cannot be processed, e.g. a missing field
    #[error("Unprocessable content: {message}")]
    UnprocessableContent { message: String },

    /// Connection, pool or query failure
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// A row could not be decoded into its model
    #[error("Failed to decode row during {operation}")]
    Decode {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn not_found(entity: &str, field: &str, value: impl Display) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn duplicate(entity: &str, field: &str, value: impl Display) -> Self {
        AppError::Duplicate {
            entity: entity.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<bb8::RunError<PoolError>> for AppError {
    fn from(error: bb8::RunError<PoolError>) -> Self {
        AppError::Database {
            operation: "acquire pooled connection".to_string(),
            source: anyhow::anyhow!(error.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                failures.iter().map(move |failure| ValidationFieldError {
                    field: field.to_string(),
                    message: failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' check", failure.code)),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationErrors { errors: fields }
    }
}

/// True when the serde_json error behind a rejection reports a missing field.
///
/// Only serde's own message is inspected. The rendered body text carries the
/// field path and may echo client input.
fn is_missing_field(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        let json_err = err
            .downcast_ref::<serde_path_to_error::Error<serde_json::Error>>()
            .map(|tracked| tracked.inner())
            .or_else(|| err.downcast_ref::<serde_json::Error>());
        if let Some(json_err) = json_err {
            return json_err.is_data() && json_err.to_string().starts_with("missing field");
        }
        current = err.source();
    }
    false
}

impl From<JsonRejection> for AppError {
    /// Missing fields are semantic failures (422); everything else about a
    /// body that cannot be bound is structural (400).
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let missing = is_missing_field(&err);
                let message = err.body_text();
                if missing {
                    AppError::UnprocessableContent { message }
                } else {
                    AppError::BadRequest { message }
                }
            }
            JsonRejection::JsonSyntaxError(err) => AppError::BadRequest {
                message: err.body_text(),
            },
            JsonRejection::MissingJsonContentType(_) => AppError::BadRequest {
                message: "Expected request with `Content-Type: application/json`".to_string(),
            },
            other => AppError::BadRequest {
                message: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(range(min = 1))]
        count: i32,
    }

    #[test]
    fn test_validation_errors_are_sorted_and_carry_messages() {
        let sample = Sample {
            name: String::new(),
            count: 0,
        };
        let error = AppError::from(sample.validate().unwrap_err());

        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "count");
                assert!(errors[0].message.contains("range"));
                assert_eq!(errors[1].field, "name");
                assert_eq!(errors[1].message, "name must not be empty");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_keeps_field_as_key() {
        let error = AppError::from(ConfigError::validation("server.port", "bad port"));
        match error {
            AppError::Configuration { key, .. } => assert_eq!(key, "server.port"),
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Payload {
        cid: i32,
        name: String,
    }

    fn tracked_error(body: &str) -> serde_path_to_error::Error<serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_str(body);
        serde_path_to_error::deserialize::<_, Payload>(&mut deserializer).unwrap_err()
    }

    #[test]
    fn test_missing_field_detection_ignores_echoed_values() {
        assert!(is_missing_field(&tracked_error(r#"{"cid": 1}"#)));
        assert!(!is_missing_field(&tracked_error(
            r#"{"cid": "missing field", "name": "x"}"#
        )));
        assert!(!is_missing_field(&tracked_error(r#"{"cid": "ten", "name": "x"}"#)));

        let plain = serde_json::from_str::<Payload>(r#"{"name": "x"}"#).unwrap_err();
        assert!(is_missing_field(&plain));
    }

    #[test]
    fn test_constructors() {
        let error = AppError::not_found("buyer", "id", 7);
        assert_eq!(error.to_string(), "Resource not found: buyer with id=7");

        let error = AppError::duplicate("seller", "cid", 10);
        assert_eq!(
            error.to_string(),
            "Duplicate entry: seller.cid = '10' already exists"
        );
    }
}
