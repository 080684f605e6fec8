//! Process-wide tracing subscriber

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

const FALLBACK_LEVEL: &str = "info";

/// Install the subscriber once at startup
///
/// `RUST_LOG` wins over `logging.level`. HTTP spans come from `TraceLayer`,
/// so only span close events are emitted here.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(&config.level));

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_span_events(FmtSpan::CLOSE))
            .try_init(),
    };

    if let Err(e) = installed {
        tracing::warn!("Subscriber already installed, keeping it: {}", e);
        return;
    }

    tracing::info!(level = %config.level, format = ?config.format, "Logging ready");
}

/// A typo in `logging.level` should not silence the service
fn configured_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_is_used() {
        assert_eq!(configured_filter("debug").to_string(), "debug");
        assert_eq!(
            configured_filter("user_registry=trace").to_string(),
            "user_registry=trace"
        );
    }

    #[test]
    fn test_unparseable_level_falls_back_to_info() {
        assert_eq!(configured_filter("user_registry=loud").to_string(), "info");
    }
}
