//! Named layout constants, carried as a tiny config-shaped module even
//! though spec.md §6 rules out any persisted or environment-driven
//! configuration for the formatter itself -- only named here instead of
//! left as magic numbers at their use sites in `tidyfmt-core`.

/// Target column budget a logical line should fit within when avoidable
/// (spec.md §4.6).
pub const MAX_WIDTH: i64 = tidyfmt_core::wrapper::MAX_WIDTH;

/// Extra indentation applied to a wrapped continuation line (spec.md §4.6).
pub const INDENT_WIDTH: i64 = tidyfmt_core::wrapper::CONTINUATION_INDENT;
