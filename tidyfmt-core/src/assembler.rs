//! Logical-line assembly.
//!
//! Turns a stream of physical lines into a stream of logical lines, each a
//! complete `Vec<Token>` ready for the spacer. A logical line can span
//! several physical lines via bracket nesting, a trailing backslash
//! (`LCont`), or an open triple-quoted string.

use crate::token::{Token, TokenKind};
use crate::tokenizer::{self, TokenizeEnd};

/// The assembler's line-state, carried from one physical line to the next.
#[derive(Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// No logical line is in progress; the next physical line starts fresh.
    Normal,
    /// The previous physical line was blank (after stripping indentation).
    Blank,
    /// The previous physical line ended inside brackets or after a `\`.
    Continuation,
    /// The previous physical line ended inside an open triple-quoted string.
    TriStr(char),
}

/// What happened after feeding one physical line to the assembler.
pub enum Fed {
    /// The logical line is still open; keep feeding physical lines.
    Pending,
    /// A blank physical line outside of any open construct: emit a blank
    /// logical line (no tokens) and start fresh.
    Blank,
    /// A logical line is complete; here are its tokens and the leading
    /// whitespace of its first physical line, preserved byte-for-byte
    /// rather than normalized to a canonical indentation width. `blank_flush`
    /// is set when this flush was triggered by a blank line closing a
    /// bracket/backslash continuation (spec.md §4.6): such a flush emits an
    /// extra blank line of its own after the logical line's output.
    Flush { tokens: Vec<Token>, indent: String, blank_flush: bool },
}

/// Accumulates physical lines into logical lines.
pub struct Assembler {
    state: LineState,
    tokens: Vec<Token>,
    nesting: i32,
    indent: String,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler {
            state: LineState::Normal,
            tokens: Vec::new(),
            nesting: 0,
            indent: String::new(),
        }
    }

    /// Feeds one physical line (including its trailing `\n`).
    pub fn feed(&mut self, line: &str) -> Fed {
        let resume = match self.state {
            LineState::TriStr(q) => Some(q),
            _ => None,
        };

        let leading = count_leading_spaces(line);
        // A blank physical line never terminates an open TriStr -- it is
        // just more content of the still-open token.
        let is_blank_line = resume.is_none() && line[leading..].trim_end_matches('\n').is_empty();

        if is_blank_line {
            return match self.state {
                // Rule 2: a blank line closes a bracket/backslash-continued
                // group -- flush what was accumulated, then enter Blank.
                LineState::Continuation => {
                    let tokens = std::mem::take(&mut self.tokens);
                    let indent = std::mem::take(&mut self.indent);
                    self.nesting = 0;
                    self.state = LineState::Blank;
                    Fed::Flush { tokens, indent, blank_flush: true }
                }
                // Rule 2: a run of blank lines coalesces into the first one.
                LineState::Blank => Fed::Pending,
                // Rule 2 (otherwise branch): first blank line of a run.
                LineState::Normal => {
                    self.state = LineState::Blank;
                    Fed::Blank
                }
                LineState::TriStr(_) => unreachable!("resume is None for blank lines"),
            };
        }

        // Whether to reset the token buffer for a fresh logical line is
        // decided from the state left by the *previous* line (rule 3: a
        // non-blank line after Blank re-enters Normal and starts fresh).
        let starting_fresh = matches!(self.state, LineState::Normal | LineState::Blank);
        if starting_fresh {
            self.tokens.clear();
            self.nesting = 0;
            self.indent = line[..leading].to_string();
        }

        // A TriStr resume must not drop the continuation line's leading
        // whitespace -- it is literal content of the still-open string,
        // not indentation to be stripped (spec.md §4.3/§4.7 "resume" note).
        let skip = if resume.is_some() { 0 } else { leading };
        let end: TokenizeEnd =
            tokenizer::tokenize_line(line, skip, &mut self.tokens, &mut self.nesting, resume);

        if let Some(q) = end.open_tristr {
            self.state = LineState::TriStr(q);
            return Fed::Pending;
        }

        let ends_in_lcont = matches!(self.tokens.last(), Some(t) if t.kind == TokenKind::LCont);
        if ends_in_lcont || self.nesting > 0 {
            self.state = LineState::Continuation;
            return Fed::Pending;
        }

        self.state = LineState::Normal;
        Fed::Flush {
            tokens: std::mem::take(&mut self.tokens),
            indent: std::mem::take(&mut self.indent),
            blank_flush: false,
        }
    }

    /// Flushes whatever logical line is in progress at end of input. A
    /// dangling continuation or open triple string at EOF still yields
    /// whatever tokens were collected (spec.md §4.7: the formatter never
    /// rejects malformed input).
    pub fn finish(mut self) -> Option<(Vec<Token>, String)> {
        if self.tokens.is_empty() {
            None
        } else {
            Some((std::mem::take(&mut self.tokens), std::mem::take(&mut self.indent)))
        }
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

fn count_leading_spaces(line: &str) -> usize {
    line.chars()
        .take_while(|&c| c == ' ' || c == '\t')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flush_all(lines: &[&str]) -> Vec<Vec<TokenKind>> {
        let mut a = Assembler::new();
        let mut out = Vec::new();
        for line in lines {
            match a.feed(line) {
                Fed::Flush { tokens, .. } => out.push(tokens.into_iter().map(|t| t.kind).collect()),
                Fed::Blank => out.push(Vec::new()),
                Fed::Pending => {}
            }
        }
        if let Some((tokens, _)) = a.finish() {
            out.push(tokens.into_iter().map(|t| t.kind).collect());
        }
        out
    }

    #[test]
    fn single_line_statement() {
        let out = flush_all(&["x = 1\n"]);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0],
            vec![TokenKind::Label, TokenKind::Equal, TokenKind::Number]
        );
    }

    #[test]
    fn bracket_continuation_joins_lines() {
        let out = flush_all(&["f(1,\n", "   2)\n"]);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0],
            vec![
                TokenKind::Label,
                TokenKind::OBrace,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::CBrace
            ]
        );
    }

    #[test]
    fn backslash_continuation_joins_lines() {
        let out = flush_all(&["x = 1 + \\\n", "    2\n"]);
        assert_eq!(out.len(), 1);
        // The LCont token itself is part of the assembled stream; the
        // spacer is responsible for dropping it from output.
        assert!(out[0].contains(&TokenKind::LCont));
    }

    #[test]
    fn blank_line_flushes_separately() {
        let out = flush_all(&["x = 1\n", "\n", "y = 2\n"]);
        assert_eq!(out.len(), 3);
        assert!(out[1].is_empty());
    }

    #[test]
    fn triple_string_spans_physical_lines_as_one_logical_line() {
        let out = flush_all(&["x = \"\"\"a\n", "b\"\"\"\n"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], vec![TokenKind::Label, TokenKind::Equal, TokenKind::TriStr]);
    }

    #[test]
    fn blank_line_inside_brackets_flushes_the_continuation() {
        // spec.md §4.2 rule 2 / §8 property 6: the blank line is consumed
        // as the terminator of the bracket-continued group -- it closes
        // the group but never itself surfaces as a bare blank output line.
        let out = flush_all(&["f(1,\n", "\n", "  2)\n"]);
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0],
            vec![TokenKind::Label, TokenKind::OBrace, TokenKind::Number, TokenKind::Comma]
        );
        assert_eq!(out[1], vec![TokenKind::Number, TokenKind::CBrace]);
    }

    #[test]
    fn run_of_blank_lines_coalesces_to_one_emission() {
        let out = flush_all(&["a\n", "\n", "\n", "\n", "b\n"]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], vec![TokenKind::Label]);
        assert!(out[1].is_empty());
        assert_eq!(out[2], vec![TokenKind::Label]);
    }

    #[test]
    fn tristr_continuation_preserves_indentation_inside_string() {
        let mut a = Assembler::new();
        a.feed("x = \"\"\"a\n");
        let fed = a.feed("    indented\n");
        assert!(matches!(fed, Fed::Pending));
        let fed = a.feed("b\"\"\"\n");
        match fed {
            Fed::Flush { tokens, .. } => {
                let tristr = tokens.last().unwrap();
                assert_eq!(tristr.kind, TokenKind::TriStr);
                assert_eq!(tristr.text, "\"\"\"a\n    indented\nb\"\"\"\n");
            }
            _ => panic!("expected flush"),
        }
    }

    #[test]
    fn unterminated_continuation_at_eof_still_flushes() {
        let out = flush_all(&["x = 1 + \\\n"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].last(), Some(&TokenKind::LCont));
    }
}
