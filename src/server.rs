//! HTTP server lifecycle: startup, optional migrations and graceful shutdown

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::{create_router, with_request_timeout};
use crate::config::settings::Settings;
use crate::db::{establish_async_connection_pool, migrate};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs migrations when `database.auto_migrate` is set, builds the pool
    /// and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// - Migration or connection pool failures
    /// - Address binding errors
    pub async fn run(self) -> AppResult<()> {
        let Settings {
            application,
            server,
            database,
            logger,
        } = &self.settings;

        tracing::info!(
            app_name = %application.name,
            app_version = %application.version,
            "Application starting"
        );
        tracing::info!(
            host = %server.host,
            port = server.port,
            request_timeout = server.request_timeout,
            "Server configuration loaded"
        );
        // The URL may carry credentials and is never logged
        tracing::info!(
            max_connections = database.max_connections,
            min_connections = database.min_connections,
            connection_timeout = database.connection_timeout,
            auto_migrate = database.auto_migrate,
            "Database configuration loaded"
        );
        tracing::debug!(
            level = %logger.level,
            console_enabled = logger.console.enabled,
            file_enabled = logger.file.enabled,
            "Logger configuration loaded"
        );

        if database.auto_migrate {
            let applied = migrate::run_pending_migrations(&database.url).await?;
            tracing::info!(count = applied.len(), migrations = ?applied, "Migrations applied");
        }

        let pool = establish_async_connection_pool(database).await?;
        tracing::info!("Database connection pool initialized");

        let router = with_request_timeout(
            create_router(AppState::new(pool)),
            server.request_timeout(),
        );

        let address = server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            AppError::Internal {
                source: anyhow::anyhow!("Failed to bind to {}: {}", address, e),
            }
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(anyhow::Error::from)?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM. A signal whose handler cannot be installed
/// is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
