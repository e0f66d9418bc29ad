//! Configuration for causetrace.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod formatter_config;
pub mod trace_config;

pub use formatter_config::FormatterConfig;
pub use trace_config::TraceConfig;
