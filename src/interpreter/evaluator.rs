/// Binary operator evaluation logic.
///
/// Handles arithmetic, concatenation, comparisons, equality and the boolean
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, the run
/// settings, and the per-instruction error collection.
pub mod core;

/// Statement evaluation.
///
/// Runs assignments, declarations, imports and the drawing instructions.
pub mod statement;

/// Utility functions for evaluation.
///
/// Provides the frame guard, `if` and `let` evaluation, and the argument
/// readers shared by the builtins.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
