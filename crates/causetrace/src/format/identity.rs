//! Pass-through formatter.

use super::{Formatted, SegmentFormatter};

/// Returns every segment exactly as rendered and never touches earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl SegmentFormatter for IdentityFormatter {
    fn format_segment(&mut self, _previous: &[String], segment: &str) -> Formatted {
        Formatted::new(segment)
    }
}
