//! The reserved-word table and the `Label` → `Special` promotion.
//!
//! The reserved-word check builds a per-character transition table (26
//! columns, lowercase only) once per process. A `HashSet` is the idiomatic
//! Rust equivalent of that trie: membership is still O(length) via
//! hashing, with no need to hand-roll a transition table.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The reserved keyword set of the input language (spec.md §3).
const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not",
    "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Returns true iff `text` is a reserved keyword of the input language.
///
/// Per spec.md §4.4, this only ever needs to be checked against a `Label`
/// token whose text is restricted to `[a-z]`; keywords containing uppercase
/// letters or digits do not exist in the reserved set, so callers that pass
/// mixed-case text simply get `false` back without any special-casing here.
pub fn is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}
