//! Error type for `tidyfmt-core`.
//!
//! The formatter is total over byte sequences (spec.md §7): it never rejects
//! malformed source. The only failure mode the engine itself can produce is
//! an I/O error from the reader or the emitter.

use thiserror::Error;

/// Errors surfaced by the formatting pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
