//! # causetrace
//!
//! Turns an error and the chain of errors it wraps into a readable trace,
//! one segment per error.
//!
//! ```
//! use causetrace::{ErrorExt, Tracer};
//!
//! let base = std::io::Error::other("aw shucks, something broke");
//! let err = base.wrap("things went wrong!");
//!
//! let tracer = Tracer::new(Some(&err));
//! assert_eq!(tracer.to_string(), "aw shucks, something broke\nthings went wrong!");
//! ```
//!
//! Segments can also be pulled one at a time with [`Tracer::read_next`] or
//! [`Tracer::segments`], or as
//! bytes through [`std::io::Read`]. Their shape is controlled by a
//! [`SegmentFormatter`](format::SegmentFormatter).

pub mod chain;
pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod format;
pub mod logging;
pub mod options;
pub mod render;
pub mod tracer;

use std::io::{self, Write};

pub use chain::{CauseChain, RootError};
pub use config::TraceConfig;
pub use context::{Context, ErrorExt, ResultExt};
pub use errors::{ConfigError, ConstructionError, OptionError, TraceError};
pub use format::{Formatted, FormatterSpec, SegmentFormatter};
pub use options::{Detail, Ordering, TraceOption};
pub use tracer::{Segments, Tracer};

/// Print the trace of `err` to stderr with the default settings, followed by
/// a newline. Use [`Tracer`] for anything more specific.
pub fn trace(err: RootError<'_>) -> Result<(), TraceError> {
    trace_to(err, &mut io::stderr().lock())
}

/// Like [`trace`], but writes to `writer`.
pub fn trace_to<W: Write>(err: RootError<'_>, writer: &mut W) -> Result<(), TraceError> {
    let mut tracer = Tracer::with_options(Some(err), Vec::new())?;
    tracer.render_to(writer)?;

    // Rendering stops short of a final newline.
    writer.write_all(b"\n").map_err(TraceError::Terminate)
}
