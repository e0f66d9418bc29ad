//! The trace engine: walks a cause chain and hands out formatted segments,
//! either whole ([`Tracer::read_next`]) or as bytes ([`std::io::Read`]).

use std::fmt;
use std::io;

use crate::chain::{CauseChain, RootError};
use crate::config::TraceConfig;
use crate::constants::EMPTY_SEGMENT;
use crate::errors::{ConstructionError, TraceError};
use crate::format::{Formatted, SegmentFormatter};
use crate::options::{Detail, Ordering, TraceOption, TraceSettings};
use crate::render::render_segment;

/// Produces the trace of an error and every error it wraps.
///
/// A tracer is consumed as it is read. Both [`read_next`](Self::read_next) and
/// [`io::Read::read`] draw from the same chain, and they may be interleaved:
/// `read_next` throws away whatever part of a segment `read` has not yet
/// delivered, then moves on to the next error.
///
/// [`segments`](Self::segments) adapts `read_next` into an iterator.
///
/// Formatting through `Display` never consumes the tracer. It renders a
/// [`snapshot`](Self::snapshot) instead: `{}` renders brief segments, `{:#}`
/// detailed ones.
pub struct Tracer<'e> {
    root: Option<RootError<'e>>,
    options: Vec<TraceOption>,
    ordering: Ordering,
    detail: Detail,
    formatter: Box<dyn SegmentFormatter + Send>,
    chain: CauseChain<'e>,
    history: Vec<String>,
    pending: Option<PendingSegment>,
}

/// A segment handed out through `read` but not yet fully delivered.
struct PendingSegment {
    bytes: Vec<u8>,
    delivered: usize,
}

impl PendingSegment {
    fn new(segment: String) -> Self {
        Self {
            bytes: segment.into_bytes(),
            delivered: 0,
        }
    }

    fn copy_into(&mut self, buf: &mut [u8]) -> usize {
        let remaining = &self.bytes[self.delivered..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.delivered += n;
        n
    }

    fn is_drained(&self) -> bool {
        self.delivered >= self.bytes.len()
    }
}

impl<'e> Tracer<'e> {
    /// A tracer with the default settings: oldest first, detailed, non-naive
    /// newline formatting.
    pub fn new(root: Option<RootError<'e>>) -> Self {
        Self::assemble(root, Vec::new(), TraceSettings::default())
    }

    /// Apply `options` in order on top of the defaults. The first option that
    /// fails aborts construction.
    pub fn with_options<I>(
        root: Option<RootError<'e>>,
        options: I,
    ) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = TraceOption>,
    {
        let options: Vec<TraceOption> = options.into_iter().collect();
        let mut settings = TraceSettings::default();
        for option in &options {
            option
                .apply(&mut settings)
                .map_err(|source| ConstructionError::InvalidOption {
                    option: option.name(),
                    source,
                })?;
        }
        Ok(Self::assemble(root, options, settings))
    }

    /// Build a tracer from a loaded [`TraceConfig`].
    pub fn from_config(
        root: Option<RootError<'e>>,
        config: &TraceConfig,
    ) -> Result<Self, ConstructionError> {
        Self::with_options(root, config.to_options())
    }

    fn assemble(
        root: Option<RootError<'e>>,
        options: Vec<TraceOption>,
        settings: TraceSettings,
    ) -> Self {
        let chain = CauseChain::build(root);
        tracing::debug!(
            depth = chain.len(),
            ordering = ?settings.ordering,
            detail = ?settings.detail,
            formatter = ?settings.formatter,
            "tracer constructed"
        );
        Self {
            root,
            options,
            ordering: settings.ordering,
            detail: settings.detail,
            formatter: settings.formatter.build(),
            chain,
            history: Vec::new(),
            pending: None,
        }
    }

    /// A fresh tracer over the same error with the same options, positioned at
    /// the start of the trace. The original is left untouched.
    pub fn snapshot(&self) -> Result<Tracer<'e>, ConstructionError> {
        tracing::debug!(remaining = self.chain.len(), "snapshotting tracer");
        Self::with_options(self.root, self.options.iter().cloned())
    }

    /// Read one whole segment. `None` marks the end of the trace.
    ///
    /// Any segment partially delivered through `read` is discarded first; the
    /// returned segment always belongs to the next error in the chain.
    pub fn read_next(&mut self) -> Option<String> {
        self.pending = None;
        self.produce()
    }

    /// Consume the rest of the trace segment by segment.
    pub fn segments(&mut self) -> Segments<'_, 'e> {
        Segments { tracer: self }
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    pub fn detail(&self) -> Detail {
        self.detail
    }

    /// Errors not yet emitted.
    pub fn remaining(&self) -> usize {
        self.chain.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_none() && self.chain.is_empty()
    }

    /// Every segment produced so far, including rewrites the formatter made to
    /// earlier entries after they were handed out.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Render the rest of the trace into `sink`, one segment per line, without
    /// a final line terminator.
    pub fn render_to<W: io::Write>(&mut self, sink: &mut W) -> Result<(), TraceError> {
        let rendered = self.render_remaining();
        sink.write_all(rendered.as_bytes()).map_err(TraceError::Render)
    }

    fn render_remaining(&mut self) -> String {
        let mut rendered = String::new();
        while let Some(segment) = self.read_next() {
            rendered.push_str(&segment);
            rendered.push('\n');
        }
        rendered.pop();
        rendered
    }

    fn produce(&mut self) -> Option<String> {
        let err = self.chain.pop(self.ordering)?;
        let mut raw = render_segment(err, self.detail);
        if raw.is_empty() {
            raw = EMPTY_SEGMENT.to_string();
        }

        let Formatted {
            segment,
            rewrite_previous,
        } = self.formatter.format_segment(&self.history, &raw);
        if let Some(rewritten) = rewrite_previous {
            if let Some(last) = self.history.last_mut() {
                *last = rewritten;
            }
        }

        tracing::trace!(
            index = self.history.len(),
            remaining = self.chain.len(),
            len = segment.len(),
            "segment produced"
        );
        self.history.push(segment.clone());
        Some(segment)
    }
}

impl io::Read for Tracer<'_> {
    /// Copy bytes of the current segment into `buf`. A single call never spans
    /// two segments. `Ok(0)` means the trace is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pending.is_none() {
            match self.produce() {
                None => return Ok(0),
                // An empty segment would read as end of trace.
                Some(segment) if segment.is_empty() => continue,
                Some(segment) => self.pending = Some(PendingSegment::new(segment)),
            }
        }
        let Some(pending) = self.pending.as_mut() else {
            return Ok(0);
        };

        let n = pending.copy_into(buf);
        if pending.is_drained() {
            self.pending = None;
        }
        Ok(n)
    }
}

/// Iterator over the remaining segments of a [`Tracer`], one `read_next` per item.
pub struct Segments<'t, 'e> {
    tracer: &'t mut Tracer<'e>,
}

impl Iterator for Segments<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tracer.read_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tracer.remaining()))
    }
}

impl fmt::Display for Tracer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut snapshot = match self.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "could not snapshot tracer for display");
                return write!(f, "<causetrace: could not snapshot tracer: {err}>");
            }
        };
        snapshot.detail = Detail::from_enabled(f.alternate());
        f.write_str(&snapshot.render_remaining())
    }
}

impl fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("ordering", &self.ordering)
            .field("detail", &self.detail)
            .field("remaining", &self.chain.len())
            .field("emitted", &self.history.len())
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}
