//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verdict_core::config::ObservabilityConfig;
use verdict_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize logging with default settings.
///
/// Reads `VERDICT_LOG` for per-target levels, e.g.
/// `VERDICT_LOG=verdict_engine=trace`. Falls back to `info`.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize logging from configuration. `VERDICT_LOG` still wins when set.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // Another subscriber was installed by the host; keep it.
        if let Err(e) = result {
            tracing::debug!("tracing already initialized: {e}");
        }
    });
}
