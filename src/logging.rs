//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the embedding application. This helper covers the common case.

use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::{PulseAuthError, Result};

const DEFAULT_FILTER: &str = "warn";

/// Install a fmt subscriber.
///
/// The filter comes from `filter`, then `RUST_LOG`, then `warn`. If a global
/// subscriber is already set this is a no-op.
pub fn init_logging(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| PulseAuthError::Config(format!("Invalid log filter '{}': {}", directives, e)))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
    Ok(())
}
