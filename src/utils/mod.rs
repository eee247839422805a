pub mod build_info;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_LOG_DIRECTIVE: &str = "bookkeeper=warn";

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `fallback`; `fallback` wins over [`DEFAULT_LOG_DIRECTIVE`].
pub fn init_tracing(fallback: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_LOG_DIRECTIVE)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        // A subscriber installed elsewhere (e.g. by a test harness) is left in place.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
