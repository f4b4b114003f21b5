//! Applies command-line overrides on top of file and environment settings

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};

/// Holds the loaded settings until CLI overrides are applied.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base settings selected by `--config` / `--env`, falling back
    /// to the `MERCADO_*` variables.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::from_file(
                path,
                cli.env.map(Environment::from).unwrap_or_else(Environment::from_env),
            ),
            None => {
                let loader = ConfigLoader::new()?;
                match cli.env {
                    Some(env) => loader.with_environment(env.into()),
                    None => loader,
                }
            }
        };

        Ok(Self::new(loader.load()?))
    }

    /// Returns the settings with global flags and then command flags
    /// applied, validated again.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
