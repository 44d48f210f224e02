//! Between-token whitespace policy and split-point scoring (spec.md §4.5).
//!
//! The spacer walks a logical line's tokens with a three-token
//! `(previous-previous, previous, next)` window, materializing the spaced
//! text the wrapper will later break. While doing so it also records, after
//! every token, a candidate split point with a score the wrapper uses to
//! pick where to break an over-long line.

use crate::token::{Token, TokenKind};

/// A boundary at which the wrapper may insert a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPoint {
    /// Byte offset into [`Spaced::text`] immediately after this boundary.
    pub offset: usize,
    /// The candidate's desirability; higher is preferred.
    pub score: i32,
    /// Bracket depth at this boundary.
    pub depth: i32,
}

/// The spaced text of a logical line, plus its candidate split points.
pub struct Spaced {
    pub text: String,
    pub splits: Vec<SplitPoint>,
}

/// A break after a `Comment` is mandatory: it is the only point a split
/// point "forces" regardless of remaining budget.
pub const FORCE_BREAK: i32 = 1_000_000;
/// Discourage breaking right after a label that opens a call (`foo(`).
const DISCOURAGE_CALL_SITE: i32 = -1_000_000;
/// Strongly discourage breaking adjacent to a `.` (attribute access reads
/// poorly split across lines).
const DOT_PENALTY: i32 = -1_000;
/// A small bonus for breaking right after a comma or colon, so the wrapper
/// prefers those over an arbitrary interior point when scores tie.
const LIST_SEPARATOR_BONUS: i32 = 1;

/// Builds the spaced text and split-point table for one logical line's
/// tokens. `tokens` never contains an `LCont`/blank placeholder; the
/// assembler's raw stream is filtered by the caller (see
/// [`crate::format`]) before reaching the spacer, except that an `LCont`
/// token, if present, is dropped here rather than upstream -- spec.md §4.6
/// governs whether the *wrapper* re-inserts a backslash, so the literal
/// backslash character from the input is never itself part of the spaced
/// text.
pub fn space(tokens: &[Token]) -> Spaced {
    let visible: Vec<&Token> = tokens.iter().filter(|t| t.kind != TokenKind::LCont).collect();

    let mut text = String::new();
    let mut splits = Vec::new();
    let mut depth: i32 = 0;
    let mut pp: Option<TokenKind> = None;
    let mut pre: Option<TokenKind> = None;

    for (i, tok) in visible.iter().enumerate() {
        let post = tok.kind;
        if post == TokenKind::Comment {
            // spec.md §6: comment bodies gain a single space after `#`
            // (none if the body starts with `!`); trailing whitespace on
            // the body is trimmed. A comment trailing other tokens on the
            // same logical line additionally gets two spaces before it,
            // the conventional inline-comment gutter; a comment that opens
            // the logical line (a standalone `# ...` line) does not.
            if i > 0 {
                text.push_str("  ");
            }
            push_comment(&mut text, &tok.text);
        } else if let Some(pre_kind) = pre {
            if wants_space(pp, pre_kind, post, depth) {
                text.push(' ');
            }
            text.push_str(&tok.text);
        } else {
            text.push_str(&tok.text);
        }

        match post {
            TokenKind::OBrace => depth += 1,
            TokenKind::CBrace => depth -= 1,
            _ => {}
        }

        let next_kind = visible.get(i + 1).map(|t| t.kind);
        splits.push(SplitPoint {
            offset: text.len(),
            score: split_score(post, next_kind, depth),
            depth,
        });

        pp = pre;
        pre = Some(post);
    }

    Spaced { text, splits }
}

/// Renders a comment token's body with the hygiene rule of spec.md §6:
/// trailing whitespace is trimmed, and exactly one space is inserted after
/// `#` unless the body (immediately, with no added or stripped leading
/// whitespace of its own) starts with `!`.
fn push_comment(text: &mut String, body: &str) {
    let trimmed_end = body.trim_end();
    text.push('#');
    if trimmed_end.is_empty() {
        return;
    }
    if trimmed_end.starts_with('!') {
        text.push_str(trimmed_end);
    } else {
        text.push(' ');
        text.push_str(trimmed_end.trim_start());
    }
}

/// Table of spec.md §4.5, evaluated top to bottom; first match wins.
fn wants_space(pp: Option<TokenKind>, pre: TokenKind, post: TokenKind, depth: i32) -> bool {
    use TokenKind::*;

    if pre == Comment {
        return false;
    }
    if pp.is_none() && pre == Operator && post == Label {
        return false;
    }
    if pre == Equal || post == Equal {
        return depth == 0;
    }
    if pre == Special {
        return post != Colon;
    }
    if post == Special {
        return true;
    }
    if pre == TriStr && post == TriStr {
        return false;
    }
    if (pre == Exp || post == Exp) && pre != Comma {
        return false;
    }
    if pre == Dot || post == Dot {
        return false;
    }
    if pre == Operator && post == Unary {
        return true;
    }
    if pre == Label && post == Unary {
        return true;
    }
    if pre == CBrace && post == Unary {
        return true;
    }
    if pre == OBrace && post == Unary {
        return false;
    }
    if pre == Unary {
        return !matches!(
            pp,
            Some(Operator) | Some(Unary) | Some(Exp) | Some(Comma) | Some(OBrace) | Some(Equal) | Some(Colon)
        );
    }
    if post == Comma || post == Colon {
        return false;
    }
    if pre == Comma {
        return post != CBrace;
    }
    if pre == Colon {
        return matches!(pp, Some(Label) | Some(Special));
    }
    if pre == CBrace && post == Label {
        return true;
    }
    if pre == Operator || post == Operator {
        return true;
    }
    if pre == OBrace || post == CBrace || pre == CBrace || post == OBrace {
        return false;
    }
    true
}

/// Split-point scoring of spec.md §4.5's second paragraph.
fn split_score(pre: TokenKind, post: Option<TokenKind>, depth: i32) -> i32 {
    use TokenKind::*;

    if pre == Comment {
        return FORCE_BREAK;
    }
    if pre == Comma && post != Some(CBrace) && depth > 0 {
        return LIST_SEPARATOR_BONUS;
    }
    if pre == Colon && post != Some(CBrace) {
        return LIST_SEPARATOR_BONUS;
    }
    if pre == Label && post == Some(OBrace) {
        return DISCOURAGE_CALL_SITE;
    }
    if pre == Dot || post == Some(Dot) {
        return DOT_PENALTY;
    }
    0
}
