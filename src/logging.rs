use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use elevator_config::{LogConfig, OutputFormat};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        OutputFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .context("failed to initialize json logging")?,
        OutputFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
            .context("failed to initialize pretty logging")?,
        OutputFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()
            .context("failed to initialize compact logging")?,
    }

    Ok(())
}
