//! Migrate command handler

use crate::config::settings::Settings;
use crate::db::migrate;
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Lists pending migrations on `dry_run`, reverts `rollback` steps when
    /// given, and applies everything pending otherwise.
    ///
    /// # Errors
    /// - Database configuration or connection errors
    /// - Migration execution errors
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;
        let url = &self.config.database.url;

        if dry_run {
            let pending = migrate::pending_migrations(url).await?;
            if pending.is_empty() {
                println!("✓ No pending migrations - database is up to date");
            } else {
                println!("Found {} pending migration(s):", pending.len());
                for name in &pending {
                    println!("  - {}", name);
                }
                println!("\nRun without --dry-run to apply these migrations");
            }
            return Ok(());
        }

        if let Some(steps) = rollback {
            let reverted = migrate::revert_migrations(url, steps).await?;
            tracing::info!(count = reverted.len(), migrations = ?reverted, "Migrations reverted");
            println!("✓ Rolled back {} migration(s):", reverted.len());
            for version in &reverted {
                println!("  - {}", version);
            }
            return Ok(());
        }

        let applied = migrate::run_pending_migrations(url).await?;
        tracing::info!(count = applied.len(), migrations = ?applied, "Migrations applied");
        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for version in &applied {
                println!("  - {}", version);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_invalid_database_config_fails_before_connecting() {
        let handler = MigrateCommandHandler::new(Settings::default());

        match handler.execute(true, None).await {
            Err(AppError::Configuration { key, .. }) => assert_eq!(key, "database.url"),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_rollback_steps_is_rejected() {
        let mut config = Settings::default();
        config.database.url = "postgres://unreachable.invalid/mercado".to_string();

        let result = MigrateCommandHandler::new(config)
            .execute(false, Some(0))
            .await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
