//! Shared application plumbing for weathercal: configuration and logging.

pub mod config;

pub use config::{ApiConfig, CalendarConfig, Config, ValidationResult};

use anyhow::Result;

/// Initialize tracing for the application.
///
/// Log level defaults to `info`; override with `RUST_LOG`.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("weathercal core initialized");
    Ok(())
}
