//! Tracing initialization for binaries and tests that use causetrace.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a `tracing` subscriber that writes to stderr.
///
/// Reads the `CAUSETRACE_LOG` environment variable as an `EnvFilter`,
/// e.g. `CAUSETRACE_LOG=causetrace=trace`. Falls back to `causetrace=info`
/// if it is not set or is invalid.
///
/// Only the first call has any effect. A global subscriber installed by
/// someone else is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
