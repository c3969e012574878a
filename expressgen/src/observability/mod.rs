//! Observability (structured logging)
//!
//! Log level comes from `RUST_LOG` when set, otherwise from the configured
//! filter, otherwise from a build-dependent default.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{Result, ScaffoldError};

/// Default filter when neither `RUST_LOG` nor the config sets one
#[must_use]
pub fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,expressgen=debug"
    } else {
        "warn,expressgen=info"
    }
}

/// Configured filter directive, or [`default_filter`] when none is set
#[must_use]
pub fn filter_directive(settings: &LoggingSettings) -> &str {
    settings.filter.as_deref().unwrap_or(default_filter())
}

/// Initialize the global tracing subscriber
///
/// # Example
///
/// ```rust,no_run
/// use expressgen::config::LoggingSettings;
/// use expressgen::observability;
///
/// # fn main() -> expressgen::Result<()> {
/// observability::init(&LoggingSettings::default())?;
/// tracing::info!("scaffolding started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed or the
/// configured filter directive does not parse.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(settings))
            .map_err(|e| ScaffoldError::Config(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match settings.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| ScaffoldError::Config(format!("logging already initialized: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_mentions_crate() {
        assert!(default_filter().contains("expressgen="));
    }

    #[test]
    fn test_filter_directive_prefers_configured_value() {
        let configured = LoggingSettings {
            filter: Some("debug".to_string()),
            ..LoggingSettings::default()
        };
        assert_eq!(filter_directive(&configured), "debug");
        assert_eq!(filter_directive(&LoggingSettings::default()), default_filter());
    }
}
