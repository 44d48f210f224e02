//! The closed set of token kinds produced by the tokenizer.
//!
//! `TokenKind` is deliberately small and flat: the formatter never builds an
//! AST, so there is no need for a richer token hierarchy. Every kind here is
//! consumed by the spacer (§4.5) and, indirectly, by the wrapper (§4.6).

use std::fmt;

/// The kind of a single token in the logical-line token stream.
///
/// `Inbetween` is the tokenizer's own pre-token state and is never present
/// in a token stream handed to the spacer; it exists only inside
/// [`crate::tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A bare identifier that is not a reserved word.
    Label,
    /// An identifier whose text matches the reserved keyword set.
    Special,
    /// A numeric literal, including scientific and hex/exponent forms.
    Number,
    /// A single- or double-quoted string, optionally prefixed (`r"..."`, `rb"..."`).
    String,
    /// A triple-quoted string; may span multiple physical lines.
    TriStr,
    /// One of `(`, `[`, `{`.
    OBrace,
    /// One of `)`, `]`, `}`.
    CBrace,
    /// A `#`-to-end-of-line comment.
    Comment,
    /// A standalone `=` (not part of a compound operator).
    Equal,
    /// Any maximal run of operator characters other than a standalone `=`.
    Operator,
    /// A `+`, `-`, or `*` reclassified as unary/splat by its run length.
    Unary,
    /// `**`.
    Exp,
    /// `,`.
    Comma,
    /// `:`.
    Colon,
    /// `.`.
    Dot,
    /// A backslash at the end of a physical line (explicit continuation).
    LCont,
}

impl TokenKind {
    /// Three-letter mnemonic used by the debug token dump, kept
    /// for parity with its `tok_to_string` helper.
    pub fn mnemonic(self) -> &'static str {
        match self {
            TokenKind::Label => "LAB",
            TokenKind::Special => "SPC",
            TokenKind::Number => "NUM",
            TokenKind::String => "STR",
            TokenKind::TriStr => "TST",
            TokenKind::OBrace => "OBR",
            TokenKind::CBrace => "CBR",
            TokenKind::Comment => "CMT",
            TokenKind::Equal => "EQL",
            TokenKind::Operator => "OPR",
            TokenKind::Unary => "UNO",
            TokenKind::Exp => "EXP",
            TokenKind::Comma => "CMA",
            TokenKind::Colon => "CLN",
            TokenKind::Dot => "DOT",
            TokenKind::LCont => "LCO",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A single token: its kind plus the exact source text it covers.
///
/// Text is owned (`String`, not `&str`) because a [`TokenKind::TriStr`]
/// token can be assembled incrementally across several physical lines by
/// the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: String) -> Self {
        Token { kind, text }
    }
}
