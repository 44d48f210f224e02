//! tidyfmt-core -- the whitespace-normalizing formatting engine.
//!
//! This crate has no knowledge of command lines, file paths, or the
//! in-place rename ritual; it only knows how to turn a byte stream of the
//! input language into a reformatted byte stream. The pipeline mirrors
//! spec.md §2 exactly:
//!
//! ```text
//! reader -> assembler -> tokenizer -> keyword classifier -> spacer -> wrapper -> emitter
//! ```
//!
//! Each stage only sees the stage before it: the tokenizer never sees a
//! file path, the wrapper never sees a raw character. [`format`] and
//! [`format_str`] are the two public entry points that drive the whole
//! pipeline; everything else is exposed for testing and for callers (such
//! as the `tidyfmt` CLI's `--verbose` token dump) that want intermediate
//! results.

pub mod assembler;
pub mod error;
pub mod keywords;
pub mod reader;
pub mod spacer;
pub mod token;
pub mod tokenizer;
pub mod wrapper;

use std::io::{BufRead, Write};

use assembler::{Assembler, Fed};
use error::Result;
use reader::PhysicalLineReader;
use token::Token;

pub use error::Error;
pub use token::{Token as FormatToken, TokenKind};

/// Drives the full pipeline over `input`, writing formatted bytes to `output`.
///
/// This is the streaming entry point the CLI uses directly against
/// `stdin`/a file handle. For callers that need the formatted bytes as a
/// `String` (the in-place mode's change-detection, or tests), see
/// [`format_str`].
pub fn format<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut reader = PhysicalLineReader::new(input);
    let mut assembler = Assembler::new();

    while let Some(line) = reader.next_line()? {
        match assembler.feed(&line) {
            Fed::Pending => {}
            Fed::Blank => writeln!(output)?,
            Fed::Flush { tokens, indent, blank_flush } => {
                emit_logical_line(output, &tokens, &indent)?;
                if blank_flush {
                    writeln!(output)?;
                }
            }
        }
    }

    if let Some((tokens, indent)) = assembler.finish() {
        emit_logical_line(output, &tokens, &indent)?;
    }

    Ok(())
}

/// In-memory convenience wrapper around [`format`], used by the CLI's
/// no-diff check (spec.md §8 property 7) and by every integration test.
pub fn format_str(input: &str) -> Result<String> {
    let mut out = Vec::new();
    format(input.as_bytes(), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Spaces and wraps one already-assembled logical line, then emits it
/// (spec.md §2 stages 5-7 fused into a single call per logical line, since
/// none of their buffers need to survive past it).
fn emit_logical_line<W: Write>(output: &mut W, tokens: &[Token], indent: &str) -> Result<()> {
    if tokens.is_empty() {
        return writeln!(output);
    }
    let spaced = spacer::space(tokens);
    let laid_out = wrapper::wrap(&spaced, indent);
    writeln!(output, "{laid_out}")?;
    Ok(())
}
