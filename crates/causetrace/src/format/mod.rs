//! Segment formatters: shape each raw segment and, once a following segment
//! is known to exist, retroactively fix up the one before it.

pub mod identity;
pub mod nested;
pub mod newline;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::OptionError;

pub use identity::IdentityFormatter;
pub use nested::NestedFormatter;
pub use newline::NewlineFormatter;

/// Result of formatting one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// Display form of the new segment.
    pub segment: String,
    /// Replacement for the most recent entry of `previous`, if it needs one.
    pub rewrite_previous: Option<String>,
}

impl Formatted {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            rewrite_previous: None,
        }
    }

    pub fn with_rewrite(mut self, previous: impl Into<String>) -> Self {
        self.rewrite_previous = Some(previous.into());
        self
    }
}

/// Shapes trace segments.
///
/// `previous` holds every segment already produced by the same tracer, in
/// emission order. Implementations may keep state across calls, so every
/// tracer owns its own instance.
pub trait SegmentFormatter {
    fn format_segment(&mut self, previous: &[String], segment: &str) -> Formatted;
}

type FormatterFactory = dyn Fn() -> Box<dyn SegmentFormatter + Send> + Send + Sync;

/// Which formatter a tracer uses. Each tracer, snapshots included, gets a
/// freshly built instance from this.
#[derive(Clone)]
pub enum FormatterSpec {
    Identity,
    Newline { naive: bool },
    Nested { indentation: String },
    Custom(Arc<FormatterFactory>),
}

impl FormatterSpec {
    /// Wrap a user-supplied formatter constructor.
    pub fn custom<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: SegmentFormatter + Send + 'static,
    {
        Self::Custom(Arc::new(move || -> Box<dyn SegmentFormatter + Send> {
            Box::new(factory())
        }))
    }

    pub fn validate(&self) -> Result<(), OptionError> {
        if let Self::Nested { indentation } = self {
            if indentation.contains(['\n', '\r']) {
                return Err(OptionError::InvalidIndentation {
                    indentation: indentation.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Box<dyn SegmentFormatter + Send> {
        match self {
            Self::Identity => Box::new(IdentityFormatter),
            Self::Newline { naive } => Box::new(NewlineFormatter::new(*naive)),
            Self::Nested { indentation } => Box::new(NestedFormatter::new(indentation.clone())),
            Self::Custom(factory) => factory(),
        }
    }

    pub fn kind(&self) -> Option<FormatterKind> {
        match self {
            Self::Identity => Some(FormatterKind::Identity),
            Self::Newline { .. } => Some(FormatterKind::Newline),
            Self::Nested { .. } => Some(FormatterKind::Nested),
            Self::Custom(_) => None,
        }
    }
}

impl Default for FormatterSpec {
    fn default() -> Self {
        Self::Newline { naive: false }
    }
}

impl fmt::Debug for FormatterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Newline { naive } => f.debug_struct("Newline").field("naive", naive).finish(),
            Self::Nested { indentation } => f
                .debug_struct("Nested")
                .field("indentation", indentation)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Built-in formatter names, as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatterKind {
    Identity,
    Newline,
    Nested,
}

impl std::str::FromStr for FormatterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(Self::Identity),
            "newline" => Ok(Self::Newline),
            "nested" => Ok(Self::Nested),
            other => Err(format!("unknown formatter `{other}`")),
        }
    }
}
