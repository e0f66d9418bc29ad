//! Chain builder: flattens an error and everything it wraps into an ordered sequence.

use std::error::Error;
use std::iter;

use crate::options::Ordering;

/// Shareable root of a cause chain.
pub type RootError<'e> = &'e (dyn Error + Send + Sync + 'static);

/// The outermost error and all of its transitive sources.
///
/// Position 0 is the error the caller handed in, the last position is the root
/// cause. Only the root is stored. `source()` hands back plain `&dyn Error`
/// references that cannot cross threads, so inner errors are reached by walking
/// from the root on demand. The chain is assumed to be finite and acyclic.
#[derive(Clone, Copy, Default)]
pub struct CauseChain<'e> {
    root: Option<RootError<'e>>,
    /// First position not yet popped from the outermost end.
    front: usize,
    /// One past the last position not yet popped from the root-cause end.
    back: usize,
}

impl<'e> CauseChain<'e> {
    /// Follow `source()` from `root` until it runs out. A `None` root gives an empty chain.
    pub fn build(root: Option<RootError<'e>>) -> Self {
        let chain = Self {
            root,
            front: 0,
            back: 0,
        };
        Self {
            back: chain.walk().count(),
            ..chain
        }
    }

    pub fn len(&self) -> usize {
        self.back - self.front
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the next error to emit: the root cause for [`Ordering::OldestFirst`],
    /// the outermost error for [`Ordering::NewestFirst`].
    pub fn pop(&mut self, ordering: Ordering) -> Option<&'e (dyn Error + 'static)> {
        if self.is_empty() {
            return None;
        }
        let position = match ordering {
            Ordering::OldestFirst => {
                self.back -= 1;
                self.back
            }
            Ordering::NewestFirst => {
                self.front += 1;
                self.front - 1
            }
        };
        self.walk().nth(position)
    }

    /// Remaining errors, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &'e (dyn Error + 'static)> {
        self.walk().skip(self.front).take(self.len())
    }

    fn walk(&self) -> impl Iterator<Item = &'e (dyn Error + 'static)> {
        let root = self.root.map(|err| err as &'e (dyn Error + 'static));
        iter::successors(root, |&err| err.source())
    }
}

impl std::fmt::Debug for CauseChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CauseChain")
            .field("remaining", &self.len())
            .finish()
    }
}
