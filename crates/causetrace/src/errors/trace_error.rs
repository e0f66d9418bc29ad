//! Trace rendering errors.

use super::ConstructionError;

/// Errors that can occur while writing a trace to a sink.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("failed to initialize trace")]
    Construction(#[from] ConstructionError),

    #[error("failed to run trace")]
    Render(#[source] std::io::Error),

    #[error("could not complete trace")]
    Terminate(#[source] std::io::Error),
}
