use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{building::BuildingConfig, controller::ControllerConfig, logging::LogConfig};
use crate::validation::ConfigValidator;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    pub controller: ControllerConfig,
    pub building: BuildingConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    /// Load configuration from config file and environment variables
    ///
    /// Load order:
    /// 1. Default configuration
    /// 2. Config file (TOML format)
    /// 3. Environment variable overrides (prefix: DISPATCH__, nested keys split on `__`)
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("controller.number", defaults.controller.number)?
            .set_default("controller.elevators", defaults.controller.elevators.clone())?
            .set_default("controller.elevator_range", defaults.controller.elevator_range)?
            .set_default("controller.range_mode", "floors")?
            .set_default(
                "controller.destination_dispatch",
                defaults.controller.destination_dispatch,
            )?
            .set_default(
                "controller.tick_interval_ms",
                defaults.controller.tick_interval_ms,
            )?
            .set_default(
                "controller.selection_strategy",
                defaults.controller.selection_strategy.clone(),
            )?
            .set_default("controller.verbose", defaults.controller.verbose)?
            .set_default("building.bottom_floor", defaults.building.bottom_floor)?
            .set_default("building.top_floor", defaults.building.top_floor)?
            .set_default("logging.level", defaults.logging.level.to_string())?
            .set_default("logging.format", "pretty")?;

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("Config file does not exist: {}", path));
            }
        } else {
            let default_paths = ["config/dispatch.toml", "dispatch.toml"];
            if let Some(path) = default_paths.iter().find(|p| Path::new(p).exists()) {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("DISPATCH")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate().context("Configuration validation failed")?;

        Ok(config)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("Failed to parse TOML config")?;
        config.validate().context("Configuration validation failed")?;
        Ok(config)
    }

    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(json_str).context("Failed to parse JSON config")?;
        config.validate().context("Configuration validation failed")?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.controller.validate()?;
        self.building.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
