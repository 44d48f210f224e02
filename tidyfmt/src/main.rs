//! tidyfmt -- a non-interactive formatter for the fax-style
//! indentation-sensitive, brace-and-operator source language.
//!
//! Whether a run rewrites files in place or streams formatted output to
//! stdout is decided by the name the binary was invoked under (spec.md
//! §6): a final byte of `i` (e.g. via a `tidyfmti` symlink pointing at
//! this same executable) enables in-place mode, mirroring the original
//! tool's `pfa`/`pfai` pair of names for one binary.

mod error;
mod inplace;
mod limits;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{CliError, Result};

#[derive(Parser, Debug)]
#[command(name = "tidyfmt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Whitespace-normalizing formatter", long_about = None)]
struct Cli {
    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,

    /// Files to format.
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        eprintln!("{}", CliError::NoFiles);
        return ExitCode::from(2);
    }

    let in_place = invoked_in_place();
    match run(&cli.files, in_place) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tidyfmt: {e}");
            ExitCode::FAILURE
        }
    }
}

/// The in-place switch is driven by `argv[0]`'s final byte, not a flag
/// (spec.md §6).
fn invoked_in_place() -> bool {
    std::env::args()
        .next()
        .and_then(|argv0| argv0.bytes().last())
        .map(|b| b == b'i')
        .unwrap_or(false)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .try_init();
}

fn run(files: &[PathBuf], in_place: bool) -> Result<()> {
    if in_place {
        for path in files {
            inplace::format_in_place(path)?;
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in files {
        format_to(path, &mut out)?;
    }
    Ok(())
}

fn format_to(path: &Path, out: &mut impl Write) -> Result<()> {
    info!("formatting {}", path.display());
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tidyfmt_core::format(BufReader::new(file), out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_verbose_and_files() {
        let cli = Cli::parse_from(["tidyfmt", "--verbose", "a.fx", "b.fx"]);
        assert!(cli.verbose);
        assert_eq!(cli.files, vec![PathBuf::from("a.fx"), PathBuf::from("b.fx")]);
    }

    #[test]
    fn cli_with_no_files_parses_to_an_empty_vec() {
        let cli = Cli::parse_from(["tidyfmt"]);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn format_to_writes_reformatted_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.fx");
        std::fs::write(&path, "a=1\n").unwrap();

        let mut buf = Vec::new();
        format_to(&path, &mut buf).unwrap();
        assert_eq!(buf, b"a = 1\n");
    }

    #[test]
    fn format_to_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.fx");
        let mut buf = Vec::new();
        let err = format_to(&path, &mut buf).unwrap_err();
        assert!(matches!(err, CliError::Open { .. }));
    }
}
