//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Pool used by the health check; `None` when services are not backed by
    /// PostgreSQL.
    pub db_pool: Option<AsyncDbPool>,
}

impl AppState {
    /// Creates PostgreSQL-backed repositories and services from the pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        let repos = Repositories::new(pool.clone());
        Self {
            services: Services::new(repos),
            db_pool: Some(pool),
        }
    }

    /// State backed by fresh in-memory repositories.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            services: Services::new(Repositories::in_memory()),
            db_pool: None,
        }
    }
}
