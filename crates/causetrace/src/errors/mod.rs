//! Error handling for causetrace.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod construction_error;
pub mod option_error;
pub mod trace_error;

pub use config_error::ConfigError;
pub use construction_error::ConstructionError;
pub use option_error::OptionError;
pub use trace_error::TraceError;
