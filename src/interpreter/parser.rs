/// Program and expression entry points.
///
/// Contains the top-level instruction loop with its error recovery, and the
/// `if` and `let` expressions.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix operators, literals, groups, calls and figure
/// constructors.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from logical operators down to powers.
pub mod binary;

/// Sequence literals.
///
/// Parses finite lists, ranges and infinite sequences between braces.
pub mod sequence;

/// Utility functions for the parser.
///
/// Token lookahead, expectations, identifiers and comma-separated lists.
pub mod utils;

/// Instruction parsing.
///
/// Recognizes every instruction form, including function declarations and
/// random declarations, by looking one or two tokens ahead.
pub mod statement;

pub use core::parse;
