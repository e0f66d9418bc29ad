//! Raw segment rendering for a single error in a chain.

use std::error::Error;

use crate::context::Context;
use crate::options::Detail;

/// Render one error as a raw segment.
///
/// [`Detail::Brief`] yields only the error's own message. [`Detail::Detailed`]
/// adds whatever origin information the error carries. Today that is the wrap
/// location of a [`Context`].
pub fn render_segment(err: &(dyn Error + 'static), detail: Detail) -> String {
    let mut segment = own_message(err);
    if detail == Detail::Detailed {
        if let Some(context) = err.downcast_ref::<Context>() {
            let location = context.location();
            segment.push_str(&format!(
                "\n    at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ));
        }
    }
    segment
}

/// The part of an error's message that belongs to the error itself.
///
/// Plenty of error types print `"{message}: {source}"`. Since the source gets a
/// segment of its own, that suffix is dropped here.
pub fn own_message(err: &(dyn Error + 'static)) -> String {
    let message = err.to_string();
    let Some(source) = err.source() else {
        return message;
    };

    let suffix = format!(": {source}");
    match message.strip_suffix(&suffix) {
        Some(own) => own.to_string(),
        None => message,
    }
}
