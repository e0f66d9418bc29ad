//! Wrapping helpers: attach a message and the caller's location to an error.

use std::error::Error;
use std::fmt;
use std::panic::Location;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error that wraps exactly one cause with a message of its own.
///
/// `Display` prints only the message. The cause is reachable through
/// [`Error::source`], and the location where the wrap happened is shown
/// by detailed rendering.
#[derive(Debug)]
pub struct Context {
    message: String,
    location: &'static Location<'static>,
    source: BoxError,
}

impl Context {
    #[track_caller]
    pub fn new<M, E>(message: M, source: E) -> Self
    where
        M: Into<String>,
        E: Into<BoxError>,
    {
        Self {
            message: message.into(),
            location: Location::caller(),
            source: source.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the error was wrapped.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Context {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Wrap any owned error in a [`Context`].
pub trait ErrorExt {
    fn wrap<M: Into<String>>(self, message: M) -> Context;
}

impl<E> ErrorExt for E
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn wrap<M: Into<String>>(self, message: M) -> Context {
        Context::new(message, self)
    }
}

/// Wrap the error side of a `Result` in a [`Context`].
pub trait ResultExt<T> {
    fn context<M: Into<String>>(self, message: M) -> Result<T, Context>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn context<M: Into<String>>(self, message: M) -> Result<T, Context> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Context::new(message, err)),
        }
    }
}
