//! Formatter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_INDENTATION;
use crate::format::{FormatterKind, FormatterSpec};

/// Configuration for the segment formatter.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FormatterConfig {
    /// Which formatter to use. Default: newline.
    pub kind: Option<FormatterKind>,
    /// Naive newline handling, newline formatter only. Default: false.
    pub naive: Option<bool>,
    /// Indentation for nested segments, nested formatter only. Default: two spaces.
    pub indentation: Option<String>,
}

impl FormatterConfig {
    /// Returns the effective formatter kind, defaulting to newline.
    pub fn effective_kind(&self) -> FormatterKind {
        self.kind.unwrap_or(FormatterKind::Newline)
    }

    /// Returns the effective naive flag, defaulting to false.
    pub fn effective_naive(&self) -> bool {
        self.naive.unwrap_or(false)
    }

    /// Returns the effective indentation, defaulting to two spaces.
    pub fn effective_indentation(&self) -> &str {
        self.indentation.as_deref().unwrap_or(DEFAULT_INDENTATION)
    }

    pub fn to_spec(&self) -> FormatterSpec {
        match self.effective_kind() {
            FormatterKind::Identity => FormatterSpec::Identity,
            FormatterKind::Newline => FormatterSpec::Newline {
                naive: self.effective_naive(),
            },
            FormatterKind::Nested => FormatterSpec::Nested {
                indentation: self.effective_indentation().to_string(),
            },
        }
    }
}
