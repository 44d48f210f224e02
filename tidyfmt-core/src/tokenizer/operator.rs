//! `Operator`/`Equal`/`Unary`/`Exp` continuation and reclassification.
//!
//! Grounded on `pfa.c`'s `TOK_OPERATOR`/`TOK_EXP` cases. The continuation
//! rule is narrower than "any run of operator characters": only `**`
//! (promoting the run to `Exp`), `//`, and a trailing `=` extend a run.
//! Every other operator character terminates the current run immediately,
//! so e.g. `<<` tokenizes as two separate one-character `Operator` tokens,
//! not one -- this is a faithful port of the original's observable
//! behavior, not an oversight.

use super::is_operator_char;
use crate::token::TokenKind;

pub enum Step {
    Continue,
    Finish,
}

/// Decides whether `c` extends the in-progress run `text_so_far`.
pub fn step(text_so_far: &str, c: char) -> Step {
    let last = text_so_far.chars().last().expect("operator run is never empty");
    if last == '*' && c == '*' {
        Step::Continue
    } else if last == '/' && c == '/' {
        Step::Continue
    } else if c == '=' {
        Step::Continue
    } else {
        Step::Finish
    }
}

/// The kind a finished run should carry.
///
/// `context_before` is the raw source character immediately preceding the
/// run (not part of the run itself) -- only consulted when the run is a
/// single bare `=`, to distinguish an assignment `Equal` from a `=` that is
/// actually the tail of a multi-character compound (`+=`, `//=`, ...).
pub fn final_kind(text: &str, context_before: char) -> TokenKind {
    let mut chars = text.chars();
    let first = chars.next().unwrap_or('\0');
    let is_exp = first == '*' && text.len() >= 2 && text.as_bytes()[1] == b'*';

    if is_exp {
        // `**=` folds back to a plain compound-assignment Operator; only a
        // bare `**` stays Exp.
        if text == "**" {
            return TokenKind::Exp;
        }
        return TokenKind::Operator;
    }

    let last = text.chars().last().unwrap_or('\0');
    if text.len() == 1 && matches!(last, '-' | '+' | '*') {
        return TokenKind::Unary;
    }
    if last == '=' && text.len() == 1 && !is_operator_char(context_before) {
        return TokenKind::Equal;
    }
    TokenKind::Operator
}
