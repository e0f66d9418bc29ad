//! Option errors.

/// Errors raised while applying a single [`TraceOption`](crate::options::TraceOption).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("indentation {indentation:?} must not contain a line terminator")]
    InvalidIndentation { indentation: String },
}
