//! Indenting formatter.

use super::{Formatted, SegmentFormatter};

/// Trims every segment, leaves the first one flush and indents the rest.
/// Each time a segment follows another, the earlier one gains a line terminator.
#[derive(Debug, Clone, Default)]
pub struct NestedFormatter {
    indentation: String,
}

impl NestedFormatter {
    pub fn new(indentation: impl Into<String>) -> Self {
        Self {
            indentation: indentation.into(),
        }
    }

    pub fn indentation(&self) -> &str {
        &self.indentation
    }
}

impl SegmentFormatter for NestedFormatter {
    fn format_segment(&mut self, previous: &[String], segment: &str) -> Formatted {
        let trimmed = segment.trim();
        let Some(last) = previous.last() else {
            return Formatted::new(trimmed);
        };

        let formatted = Formatted::new(format!("{}{}", self.indentation, trimmed));
        if last.ends_with('\n') {
            formatted
        } else {
            formatted.with_rewrite(format!("{last}\n"))
        }
    }
}
