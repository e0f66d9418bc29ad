//! Constants shared across causetrace.

/// Substituted for an error whose rendering is empty, so an empty segment is
/// never mistaken for the end of the trace.
pub const EMPTY_SEGMENT: &str = "<empty error message>";

/// Environment variable read by [`init_tracing`](crate::logging::init_tracing).
pub const LOG_ENV_VAR: &str = "CAUSETRACE_LOG";

/// Filter used when `CAUSETRACE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "causetrace=info";

/// Prefix for the config environment overrides.
pub const ENV_PREFIX: &str = "CAUSETRACE_";

/// Indentation used by the nested formatter when none is configured.
pub const DEFAULT_INDENTATION: &str = "  ";
