//! Shared fixtures for causetrace integration tests.
#![allow(dead_code)]

use causetrace::{Context, ErrorExt};

/// A root cause with a fixed message and no source.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Leaf(pub String);

impl Leaf {
    pub fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

pub const ROOT: &str = "things broke :(";
pub const MIDDLE: &str = "aw shucks";
pub const OUTER: &str = "I tried very hard and failed";

/// `OUTER` wrapping `MIDDLE` wrapping the `ROOT` leaf.
pub fn three_deep() -> Context {
    Leaf::new(ROOT).wrap(MIDDLE).wrap(OUTER)
}

/// `MIDDLE` wrapping the `ROOT` leaf.
pub fn two_deep() -> Context {
    Leaf::new(ROOT).wrap(MIDDLE)
}

/// A chain of `depth` errors named `e0` (root) through `e{depth-1}` (outermost).
pub fn chain_of(depth: usize) -> Box<dyn std::error::Error + Send + Sync + 'static> {
    let mut err: Box<dyn std::error::Error + Send + Sync + 'static> = Box::new(Leaf::new("e0"));
    for i in 1..depth {
        err = Box::new(Context::new(format!("e{i}"), err));
    }
    err
}

/// Drain a reader with a fixed-size buffer, collecting every byte until end of trace.
pub fn read_all_chunked(reader: &mut impl std::io::Read, chunk: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; chunk];
    let mut collected = Vec::new();
    loop {
        let n = reader.read(&mut buffer).unwrap();
        if n == 0 {
            break;
        }
        collected.extend_from_slice(&buffer[..n]);
    }
    collected
}
