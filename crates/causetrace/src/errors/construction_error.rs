//! Tracer construction errors.

use super::OptionError;

/// Errors that abort construction of a [`Tracer`](crate::Tracer).
/// No partially built tracer is ever handed out alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("failed to apply trace option `{option}`")]
    InvalidOption {
        option: &'static str,
        #[source]
        source: OptionError,
    },
}
