//! Tests for whole-trace rendering: `Display`, `render_to` and the entry points.

mod common;

use std::io::{self, Read, Write};

use causetrace::{trace_to, Detail, FormatterSpec, Ordering, TraceError, TraceOption, Tracer};
use common::{three_deep, two_deep, Leaf, MIDDLE, OUTER, ROOT};

struct RejectingWriter;

impl Write for RejectingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts exactly `budget` bytes, then fails.
struct ShortWriter {
    written: Vec<u8>,
    budget: usize,
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// --- Display ---

#[test]
fn display_oldest_first() {
    let base = Leaf::new("aw shucks, something broke");
    let err = causetrace::Context::new("things went wrong!", base);
    let tracer = Tracer::new(Some(&err));
    assert_eq!(
        format!("{tracer}"),
        "aw shucks, something broke\nthings went wrong!"
    );
}

#[test]
fn display_newest_first() {
    let base = Leaf::new("aw shucks, something broke");
    let err = causetrace::Context::new("things went wrong!", base);
    let tracer =
        Tracer::with_options(Some(&err), [TraceOption::Ordering(Ordering::NewestFirst)]).unwrap();
    assert_eq!(
        format!("{tracer}"),
        "things went wrong!\naw shucks, something broke"
    );
}

#[test]
fn display_alternate_is_detailed() {
    let err = two_deep();
    let tracer =
        Tracer::with_options(Some(&err), [TraceOption::Detail(Detail::Brief)]).unwrap();
    let brief = format!("{tracer}");
    let detailed = format!("{tracer:#}");

    assert_eq!(brief, format!("{ROOT}\n{MIDDLE}"));
    assert!(detailed.starts_with(&format!("{ROOT}\n{MIDDLE}\n    at ")));
}

#[test]
fn display_does_not_consume_tracer() {
    let err = three_deep();
    let mut tracer = Tracer::new(Some(&err));

    let first = tracer.to_string();
    let second = tracer.to_string();
    assert_eq!(first, second);
    assert_eq!(tracer.remaining(), 3);
    assert!(tracer.history().is_empty());

    assert_eq!(tracer.read_next().as_deref(), Some(ROOT));
}

#[test]
fn display_mid_read_renders_from_the_start() {
    let err = three_deep();
    let mut tracer = Tracer::new(Some(&err));
    let mut buffer = [0u8; 4];
    tracer.read_exact(&mut buffer).unwrap();

    assert_eq!(tracer.to_string(), format!("{ROOT}\n{MIDDLE}\n{OUTER}"));

    // The in-progress read picks up exactly where it stopped.
    let mut rest = [0u8; 11];
    tracer.read_exact(&mut rest).unwrap();
    assert_eq!(&rest, b"gs broke :(");
}

#[test]
fn display_none_root_is_empty() {
    let tracer = Tracer::new(None);
    assert_eq!(tracer.to_string(), "");
}

#[test]
fn display_other_format_traits_do_not_render_trace() {
    let err = Leaf::new(ROOT);
    let tracer = Tracer::new(Some(&err));
    let debug = format!("{tracer:?}");
    assert!(debug.starts_with("Tracer"));
    assert!(!debug.contains(ROOT));
}

#[test]
fn debug_never_leaks_messages() {
    let err = three_deep();
    let mut tracer = Tracer::new(Some(&err));
    let _ = tracer.read_next();

    let debug = format!("{tracer:?}");
    for message in [ROOT, MIDDLE, OUTER] {
        assert!(!debug.contains(message), "{debug}");
    }
    assert!(debug.contains("remaining: 2"));
    assert!(debug.contains("emitted: 1"));
}

// --- snapshot ---

#[test]
fn snapshot_starts_fresh_and_leaves_original_alone() {
    let err = three_deep();
    let mut original = Tracer::with_options(
        Some(&err),
        [
            TraceOption::Detail(Detail::Brief),
            TraceOption::Ordering(Ordering::NewestFirst),
        ],
    )
    .unwrap();
    assert_eq!(original.read_next().as_deref(), Some(OUTER));

    let mut snapshot = original.snapshot().unwrap();
    assert_eq!(snapshot.ordering(), Ordering::NewestFirst);
    assert_eq!(snapshot.remaining(), 3);
    let all: Vec<String> = snapshot.segments().collect();
    assert_eq!(all, vec![OUTER, MIDDLE, ROOT]);

    assert_eq!(original.remaining(), 2);
    assert_eq!(original.read_next().as_deref(), Some(MIDDLE));
}

#[test]
fn snapshot_has_its_own_formatter_state() {
    let err = three_deep();
    let mut original = Tracer::with_options(
        Some(&err),
        [TraceOption::Formatter(FormatterSpec::Nested {
            indentation: "> ".to_string(),
        })],
    )
    .unwrap();
    let _ = original.read_next();

    let mut snapshot = original.snapshot().unwrap();
    // First segment of a fresh trace is never indented.
    assert_eq!(snapshot.read_next().as_deref(), Some(ROOT));
    assert!(original.read_next().unwrap().starts_with("> "));
}

// --- render_to ---

#[test]
fn render_to_joins_segments_without_final_newline() {
    let err = three_deep();
    let mut tracer =
        Tracer::with_options(Some(&err), [TraceOption::Detail(Detail::Brief)]).unwrap();
    let mut out = Vec::new();
    tracer.render_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{ROOT}\n{MIDDLE}\n{OUTER}")
    );
    assert!(tracer.is_exhausted());
}

#[test]
fn render_to_reports_sink_failure() {
    let err = three_deep();
    let mut tracer = Tracer::new(Some(&err));
    let result = tracer.render_to(&mut RejectingWriter);
    assert!(matches!(result, Err(TraceError::Render(_))));
}

// --- trace_to ---

#[test]
fn trace_to_single_error() {
    let err = Leaf::new(ROOT);
    let mut out = Vec::new();
    trace_to(&err, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{ROOT}\n"));
}

#[test]
fn trace_to_wrapped_errors() {
    let err = two_deep();
    let mut out = Vec::new();
    trace_to(&err, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches(ROOT).count(), 1);
    assert_eq!(text.matches(MIDDLE).count(), 1);
    assert!(text.find(ROOT) < text.find(MIDDLE));
    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
}

#[test]
fn trace_to_reports_render_failure() {
    let err = Leaf::new(ROOT);
    let result = trace_to(&err, &mut RejectingWriter);
    assert!(matches!(result, Err(TraceError::Render(_))));
}

#[test]
fn trace_to_reports_missing_terminator() {
    let err = Leaf::new(ROOT);
    let mut sink = ShortWriter {
        written: Vec::new(),
        budget: ROOT.len(),
    };
    let result = trace_to(&err, &mut sink);
    assert!(matches!(result, Err(TraceError::Terminate(_))));
    assert_eq!(sink.written, ROOT.as_bytes());
}
