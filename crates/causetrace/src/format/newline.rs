//! Line-boundary formatter.

use super::{Formatted, SegmentFormatter};

/// Makes every segment but the last end in exactly one line terminator.
///
/// Whether a segment is last is only known once the next one arrives, so the
/// raw form of each segment is remembered and the terminator is added to it
/// retroactively.
///
/// In naive mode only trailing `'\n'` characters are considered. Otherwise
/// every `'\n'` in the whitespace after the last visible character counts,
/// which copes with messages that end in `"\n    "`.
#[derive(Debug, Clone, Default)]
pub struct NewlineFormatter {
    naive: bool,
    last_raw: String,
}

impl NewlineFormatter {
    pub fn new(naive: bool) -> Self {
        Self {
            naive,
            last_raw: String::new(),
        }
    }

    pub fn is_naive(&self) -> bool {
        self.naive
    }

    fn strip_newlines(&self, message: &str) -> String {
        if self.naive {
            return message.trim_end_matches('\n').to_string();
        }

        // A message with nothing visible in it has no trailing run to speak of.
        let Some(split) = visible_end(message) else {
            return message.to_string();
        };
        let (body, tail) = message.split_at(split);
        let mut stripped = String::with_capacity(message.len());
        stripped.push_str(body);
        stripped.extend(tail.chars().filter(|&c| c != '\n'));
        stripped
    }

    fn terminate(&self, message: &str) -> String {
        let terminated = if self.naive {
            message.ends_with('\n')
        } else {
            let tail = visible_end(message).map_or(message, |split| &message[split..]);
            tail.contains('\n')
        };

        if terminated {
            message.to_string()
        } else {
            format!("{message}\n")
        }
    }
}

impl SegmentFormatter for NewlineFormatter {
    fn format_segment(&mut self, previous: &[String], segment: &str) -> Formatted {
        let last_raw = std::mem::replace(&mut self.last_raw, segment.to_string());
        let formatted = Formatted::new(self.strip_newlines(segment));
        if previous.is_empty() {
            return formatted;
        }
        formatted.with_rewrite(self.terminate(&last_raw))
    }
}

/// Byte offset just past the last non-whitespace character.
fn visible_end(message: &str) -> Option<usize> {
    message
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(idx, c)| idx + c.len_utf8())
}
