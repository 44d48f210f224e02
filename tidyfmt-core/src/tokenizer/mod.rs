//! Character-driven tokenizer (spec.md §4.3).
//!
//! One call to [`tokenize_line`] consumes a single physical line (already
//! including its trailing `\n`) and appends whatever complete tokens it can
//! produce onto the caller's running token buffer. The only state that ever
//! needs to survive a physical-line boundary is an open [`TokenKind::TriStr`]
//! (captured by [`TokenizeEnd::open_tristr`]); every other token kind is
//! fully resolved within the line it starts on, mirroring the "dependency
//! order is strictly downstream" rule of spec.md §2.

mod number;
mod operator;
mod string;

use crate::token::{Token, TokenKind};

/// True for the operator-character set of spec.md §3.
fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '=' | '+' | '-' | '@' | '|' | '^' | '&' | '*' | '/' | '<' | '>' | '!' | '~' | '%'
    )
}

/// True for an identifier-leading character: a letter, underscore, or any
/// byte above the ASCII range (spec.md §6: "Bytes > 127 are treated as
/// identifier characters").
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

fn is_numeric_lead(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Internal scanner states. Distinct from [`TokenKind`]: a handful of kinds
/// (`OBrace`, `CBrace`, `Comma`, `Colon`, `LCont`) are always exactly one
/// character and never need a persistent state of their own.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Label,
    Number,
    String,
    TriStr,
    Comment,
    Operator,
}

/// What happened while tokenizing a physical line.
pub struct TokenizeEnd {
    /// `Some(quote)` if the line ends inside a still-open triple-quoted
    /// string; the assembler must resume tokenizing the *same* token on the
    /// next physical line.
    pub open_tristr: Option<char>,
}

/// Tokenizes one physical line, appending tokens onto `tokens` and tracking
/// bracket depth in `nesting`.
///
/// `skip` characters are dropped from the front of `line` before scanning
/// begins (used by the assembler to skip already-counted leading
/// whitespace at the start of a fresh logical line).
///
/// `resume` is `Some(quote)` when `tokens`'s last element is a still-open
/// `TriStr` token (from a previous call) that this line continues.
pub fn tokenize_line(
    line: &str,
    skip: usize,
    tokens: &mut Vec<Token>,
    nesting: &mut i32,
    resume: Option<char>,
) -> TokenizeEnd {
    let chars: Vec<char> = line.chars().skip(skip).collect();
    if chars.is_empty() {
        return TokenizeEnd { open_tristr: None };
    }
    let last_idx = chars.len() - 1;

    // Scanner-local state, reset for every physical line except for the
    // TriStr resume carried in from `resume`.
    let (mut state, mut text) = match resume {
        Some(quote) => {
            let reopened = tokens.pop().expect("resume implies an open TriStr token");
            (Some(ScanState::TriStr), reopened.text)
        }
        None => (None, String::new()),
    };
    let mut string_starter = resume.unwrap_or('\0');
    let mut escape_odd = false;
    let mut lead_run: u8 = 0;
    let mut op_context_before = ' ';
    let mut prev_char = '\0';

    let mut i = 0usize;
    while i < chars.len() {
        let raw = chars[i];
        let c = if raw == '\t' { ' ' } else { raw };
        let at_eol = i == last_idx;
        let i_before = i;

        // Runs of 2+ spaces outside strings collapse to a single boundary;
        // the extra spaces are dropped one at a time here.
        let inside_string = matches!(state, Some(ScanState::String) | Some(ScanState::TriStr));
        if !inside_string && c == ' ' {
            let next_is_space = chars
                .get(i + 1)
                .map(|&n| if n == '\t' { ' ' } else { n })
                .map_or(false, |n| n == ' ');
            if next_is_space {
                i += 1;
                prev_char = c;
                continue;
            }
        }

        match state {
            None => {
                // Inbetween: decide what (if anything) begins here.
                if c == '#' {
                    state = Some(ScanState::Comment);
                    text.clear();
                    i += 1;
                } else if is_quote(c) {
                    state = Some(ScanState::String);
                    string_starter = c;
                    lead_run = 1;
                    escape_odd = false;
                    text.clear();
                    text.push(c);
                    i += 1;
                } else if is_operator_char(c) {
                    state = Some(ScanState::Operator);
                    op_context_before = prev_char;
                    text.clear();
                    text.push(c);
                    i += 1;
                } else if c == ',' {
                    tokens.push(Token::new(TokenKind::Comma, c.to_string()));
                    i += 1;
                } else if c == ':' {
                    tokens.push(Token::new(TokenKind::Colon, c.to_string()));
                    i += 1;
                } else if matches!(c, '(' | '[' | '{') {
                    tokens.push(Token::new(TokenKind::OBrace, c.to_string()));
                    *nesting += 1;
                    i += 1;
                } else if matches!(c, ')' | ']' | '}') {
                    tokens.push(Token::new(TokenKind::CBrace, c.to_string()));
                    *nesting -= 1;
                    i += 1;
                } else if c == '\\' {
                    tokens.push(Token::new(TokenKind::LCont, c.to_string()));
                    i += 1;
                } else if is_ident_start(c) {
                    state = Some(ScanState::Label);
                    text.clear();
                    text.push(c);
                    i += 1;
                } else if is_numeric_lead(c) {
                    state = Some(ScanState::Number);
                    text.clear();
                    text.push(c);
                    i += 1;
                } else {
                    // Whitespace or an otherwise unrecognized byte: dropped.
                    i += 1;
                }
            }
            Some(ScanState::Label) => {
                if is_ident_continue(c) {
                    text.push(c);
                    i += 1;
                } else if is_quote(c) {
                    // Captures prefixed strings like r"..." / rb"..." as a
                    // single token (spec.md §4.3).
                    state = Some(ScanState::String);
                    string_starter = c;
                    lead_run = 1;
                    escape_odd = false;
                    text.push(c);
                    i += 1;
                } else {
                    finish_label(tokens, &mut text);
                    state = None;
                }
            }
            Some(ScanState::Number) => match number::step(c, &text) {
                number::Step::Continue => {
                    text.push(c);
                    i += 1;
                }
                number::Step::Finish => {
                    let kind = number::final_kind(&text);
                    tokens.push(Token::new(kind, std::mem::take(&mut text)));
                    state = None;
                }
            },
            Some(ScanState::Operator) => match operator::step(&text, c) {
                operator::Step::Continue => {
                    text.push(c);
                    i += 1;
                }
                operator::Step::Finish => {
                    let kind = operator::final_kind(&text, op_context_before);
                    tokens.push(Token::new(kind, std::mem::take(&mut text)));
                    state = None;
                }
            },
            Some(ScanState::String) if at_eol => {
                // A plain string never spans physical lines (only TriStr
                // does); leave the newline unconsumed so the force-close
                // below flushes the token without it.
            }
            Some(ScanState::String) => {
                match string::string_step(c, string_starter, &mut escape_odd, &mut lead_run) {
                    string::Step::Continue => {
                        text.push(c);
                        i += 1;
                    }
                    string::Step::Promote => {
                        text.push(c);
                        i += 1;
                        state = Some(ScanState::TriStr);
                        lead_run = 0;
                        escape_odd = false;
                    }
                    string::Step::CloseConsuming => {
                        text.push(c);
                        i += 1;
                        tokens.push(Token::new(TokenKind::String, std::mem::take(&mut text)));
                        state = None;
                    }
                    string::Step::CloseBefore => {
                        tokens.push(Token::new(TokenKind::String, std::mem::take(&mut text)));
                        state = None;
                    }
                }
            }
            Some(ScanState::TriStr) => {
                match string::tristr_step(c, string_starter, &mut escape_odd, &mut lead_run) {
                    string::Step::Continue | string::Step::Promote => {
                        text.push(c);
                        i += 1;
                    }
                    string::Step::CloseConsuming => {
                        text.push(c);
                        i += 1;
                        tokens.push(Token::new(TokenKind::TriStr, std::mem::take(&mut text)));
                        state = None;
                    }
                    string::Step::CloseBefore => {
                        tokens.push(Token::new(TokenKind::TriStr, std::mem::take(&mut text)));
                        state = None;
                    }
                }
            }
            Some(ScanState::Comment) => {
                if at_eol {
                    // The trailing newline is never part of the comment
                    // body; leave it unconsumed so the force-close below
                    // flushes the token instead of silently dropping it.
                } else {
                    text.push(c);
                    i += 1;
                }
            }
        }

        // A still-open String/TriStr/Comment is force-closed at the
        // physical-line boundary (spec.md §4.7): a string is not allowed to
        // span lines except as TriStr, and a comment always runs to EOL.
        // TriStr is deliberately exempt -- it resumes on the next line.
        if at_eol && i <= last_idx {
            match state {
                Some(ScanState::String) => {
                    tokens.push(Token::new(TokenKind::String, std::mem::take(&mut text)));
                    state = None;
                }
                Some(ScanState::Comment) => {
                    tokens.push(Token::new(TokenKind::Comment, std::mem::take(&mut text)));
                    state = None;
                }
                _ => {}
            }
        }

        // Only a character that was actually consumed this iteration
        // becomes "the character before" whatever starts next -- a
        // terminator that's re-read as the start of the next token (e.g.
        // the `=` that ends a `Label`) must not count as its own context.
        if i > i_before {
            prev_char = c;
        }
    }

    match state {
        Some(ScanState::TriStr) => {
            tokens.push(Token::new(TokenKind::TriStr, text));
            TokenizeEnd {
                open_tristr: Some(string_starter),
            }
        }
        Some(ScanState::Label) => {
            finish_label(tokens, &mut text);
            TokenizeEnd { open_tristr: None }
        }
        _ => TokenizeEnd { open_tristr: None },
    }
}

fn finish_label(tokens: &mut Vec<Token>, text: &mut String) {
    if text.is_empty() {
        return;
    }
    let kind = if crate::keywords::is_keyword(text) {
        TokenKind::Special
    } else {
        TokenKind::Label
    };
    tokens.push(Token::new(kind, std::mem::take(text)));
}
