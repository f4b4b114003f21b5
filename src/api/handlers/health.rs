//! Health check endpoint.
//!
//! Probes the database pool directly rather than going through a service.

use std::collections::HashMap;
use std::time::Instant;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// `GET /health`: 200 when healthy or degraded, 503 when the database is
/// unreachable.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(&state).await;
    let status = database.status;

    let mut checks = HashMap::new();
    checks.insert("database".to_string(), database);

    let response = HealthResponse {
        status,
        version: crate::pkg_version().to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    };

    let code = match status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(response))
}

async fn check_database(state: &AppState) -> ComponentHealth {
    let Some(pool) = &state.db_pool else {
        return ComponentHealth {
            status: HealthStatus::Degraded,
            message: Some("Database pool not configured".to_string()),
            response_time_ms: None,
        };
    };

    let start_time = Instant::now();
    let elapsed = || Some(start_time.elapsed().as_millis() as u64);

    match pool.get().await {
        Ok(mut conn) => {
            use diesel_async::RunQueryDsl;

            match diesel::sql_query("SELECT 1").execute(&mut conn).await {
                Ok(_) => ComponentHealth {
                    status: HealthStatus::Healthy,
                    message: Some("Connected".to_string()),
                    response_time_ms: elapsed(),
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Health check query failed");
                    ComponentHealth {
                        status: HealthStatus::Unhealthy,
                        message: Some(format!("Query failed: {}", e)),
                        response_time_ms: elapsed(),
                    }
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not acquire a connection");
            ComponentHealth {
                status: HealthStatus::Unhealthy,
                message: Some(format!("Connection failed: {}", e)),
                response_time_ms: elapsed(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_pool_reports_degraded() {
        let (code, Json(response)) = health_check(State(AppState::in_memory())).await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(response.status, HealthStatus::Degraded);
        assert_eq!(response.checks["database"].status, HealthStatus::Degraded);
        assert!(!response.version.is_empty());
    }
}
