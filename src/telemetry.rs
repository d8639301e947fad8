//! Tracing subscriber initialisation.
//!
//! Call [`init_tracing`] once at program start. Later calls are ignored
//! because the global subscriber can only be set once per process.

use crate::config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.level` is the default
/// verbosity. With `config.json` set, log lines are newline-delimited JSON.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::init_tracing;
    use crate::config::LoggingConfig;

    #[test]
    fn repeated_initialisation_is_harmless() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        assert!(tracing::dispatcher::has_been_set());

        init_tracing(&LoggingConfig {
            json: true,
            ..config
        });
        assert!(tracing::dispatcher::has_been_set());
    }
}
