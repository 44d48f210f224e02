//! Error type for the `tidyfmt` CLI.
//!
//! `tidyfmt-core` is total over byte sequences and only ever fails on I/O;
//! the CLI layer adds the failure kinds spec.md §7 assigns to external
//! collaborators: an unreadable input file (fatal, stops the run) and the
//! no-arguments usage error. Non-fatal per-file problems in in-place mode
//! (a failed `stat`/`chmod`, a failed rename) are warned via `tracing` and
//! do not produce a `CliError` -- spec.md §7 says those "continue with the
//! rename attempt" / "continue with remaining files" rather than aborting.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// No file arguments were given (spec.md §6).
    #[error("usage: tidyfmt [--verbose] <file>...")]
    NoFiles,

    /// A file argument could not be opened for reading.
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The formatting engine hit an I/O error mid-stream.
    #[error(transparent)]
    Format(#[from] tidyfmt_core::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
