/// Numeric conversion helpers.
///
/// Safe conversions between `usize` and `f64` that refuse to lose data, used
/// wherever a sequence count becomes a language number or a numeric literal
/// has to act as a count.
pub mod num;
