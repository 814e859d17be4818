/// Builtin lookup and user-defined function calls.
///
/// Holds the static builtin table and the call machinery shared by builtins
/// and functions declared in a program.
pub mod core;

/// Numeric builtins and the sequence helpers `count` and `measure`.
pub mod builtin;

/// Figure constructors and `intersect`.
///
/// Every constructor validates the types of its arguments and builds the
/// matching [`Figure`](crate::interpreter::value::figure::Figure).
pub mod figure;

/// Random values.
///
/// Owns the per-run random generator and implements `randoms`, `samples`,
/// `points` and random declarations.
pub mod random;
