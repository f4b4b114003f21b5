use std::borrow::Cow;

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request, rejection::JsonRejection};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

/// JSON body that has been deserialized and validated.
///
/// Structural failures (bad syntax, wrong types, wrong content type) reject
/// with 400; missing fields and failed rules reject with 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i32);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        raw.parse::<i32>()
            .map(ResourceId)
            .map_err(|_| AppError::bad_request(format!("Invalid id '{}': expected an integer", raw)))
    }
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(custom(function = "not_blank"))]
        name: String,
        #[validate(range(min = 0, message = "capacity must not be negative"))]
        capacity: i32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let request = json_request(r#"{"name":"Jhon","capacity":3}"#);
        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(body.name, "Jhon");
        assert_eq!(body.capacity, 3);
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let request = json_request(r#"{"capacity":3}"#);
        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        match result {
            Err(AppError::UnprocessableContent { message }) => {
                assert!(message.contains("missing field"));
            }
            other => panic!("Expected UnprocessableContent, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_wrong_type_is_bad_request() {
        let request = json_request(r#"{"name":"Jhon","capacity":"three"}"#);
        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let request = json_request(r#"{"name":"#);
        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .body(Body::from(r#"{"name":"Jhon","capacity":3}"#))
            .unwrap();
        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_failed_rules_are_reported_per_field() {
        let request = json_request(r#"{"name":"   ","capacity":-1}"#);
        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        match result {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "capacity");
                assert_eq!(errors[0].message, "capacity must not be negative");
                assert_eq!(errors[1].field, "name");
                assert_eq!(errors[1].message, "must not be blank");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Doe").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t").is_err());
    }
}
