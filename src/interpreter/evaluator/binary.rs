/// Operator dispatch.
///
/// Routes each binary operator to the handler for its family.
pub mod core;

/// Arithmetic.
///
/// Number arithmetic, string and sequence concatenation, the absorbing
/// behaviour of `undefined` under `+`, and measure arithmetic.
pub mod arithmetic;

/// Comparisons, equality and boolean logic.
pub mod comparison;
