//! Physical-line reader (spec.md §4.1).
//!
//! Pulls one physical line at a time off an arbitrary [`BufRead`], growing
//! its internal buffer as needed (`String`'s own doubling growth is the
//! "native growable sequence" spec.md §9 asks a rewrite to use in place of
//! the original's hand-rolled `vlbuf`). End of stream is signalled as
//! `Ok(None)`, distinct from a blank physical line (`Ok(Some("\n".into()))`).

use std::io::BufRead;

use crate::error::Result;

/// Reads whole physical lines, including their trailing `\n`, from `R`.
pub struct PhysicalLineReader<R> {
    inner: R,
}

impl<R: BufRead> PhysicalLineReader<R> {
    pub fn new(inner: R) -> Self {
        PhysicalLineReader { inner }
    }

    /// Returns the next physical line, or `None` at end of input.
    ///
    /// If the underlying stream ends without a trailing `\n` on its last
    /// line, one is synthesized so every line handed to the assembler ends
    /// in `\n`, per spec.md §4.1.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let n = self.inner.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if !buf.ends_with('\n') {
            buf.push('\n');
        }
        Ok(Some(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_with_terminators() {
        let mut r = PhysicalLineReader::new(Cursor::new("a\nb\n"));
        assert_eq!(r.next_line().unwrap(), Some("a\n".to_string()));
        assert_eq!(r.next_line().unwrap(), Some("b\n".to_string()));
        assert_eq!(r.next_line().unwrap(), None);
    }

    #[test]
    fn synthesizes_missing_final_terminator() {
        let mut r = PhysicalLineReader::new(Cursor::new("a\nb"));
        assert_eq!(r.next_line().unwrap(), Some("a\n".to_string()));
        assert_eq!(r.next_line().unwrap(), Some("b\n".to_string()));
        assert_eq!(r.next_line().unwrap(), None);
    }

    #[test]
    fn blank_line_is_distinct_from_eof() {
        let mut r = PhysicalLineReader::new(Cursor::new("\n"));
        assert_eq!(r.next_line().unwrap(), Some("\n".to_string()));
        assert_eq!(r.next_line().unwrap(), None);
    }

    #[test]
    fn empty_input_is_immediate_eof() {
        let mut r = PhysicalLineReader::new(Cursor::new(""));
        assert_eq!(r.next_line().unwrap(), None);
    }
}
