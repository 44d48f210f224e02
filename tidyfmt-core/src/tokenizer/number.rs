//! `Number`/`Dot` continuation and final-kind reclassification.
//!
//! Grounded on `pfa.c`'s `TOK_NUMBER` case. A numeric-literal run absorbs
//! digits, a single leading `.`, `e`/`E` exponent markers (and a sign
//! immediately following one), and `x`/`X` for hex literals. A run that
//! turns out to have been just a lone `.` is reclassified to
//! [`crate::token::TokenKind::Dot`] at the very end -- this is what lets
//! `a.b` tokenize as `Label Dot Label` instead of swallowing `.b` into a
//! bogus number.

use super::is_numeric_lead;
use crate::token::TokenKind;

pub enum Step {
    Continue,
    Finish,
}

/// Decides whether `c` extends the in-progress run `text_so_far`.
pub fn step(c: char, text_so_far: &str) -> Step {
    let len = text_so_far.chars().count();
    let prev = text_so_far.chars().last().unwrap_or('\0');
    let is_dot_so_far = len == 1 && prev == '.' && !is_numeric_lead(c);

    if !is_dot_so_far && is_numeric_lead(c) {
        Step::Continue
    } else if prev == 'e' && (c == '-' || c == '+') {
        Step::Continue
    } else if !is_dot_so_far && (c == 'e' || c == 'x') {
        Step::Continue
    } else {
        Step::Finish
    }
}

/// The kind a finished run should carry: `Dot` for a lone `.`, else `Number`.
pub fn final_kind(text: &str) -> TokenKind {
    if text == "." {
        TokenKind::Dot
    } else {
        TokenKind::Number
    }
}
