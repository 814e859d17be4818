/// Drawing colors.
///
/// Defines the `Color` type pushed by `color` statements and passed to the
/// renderer with every draw call.
pub mod color;
/// Geometric figures.
///
/// Defines the immutable figure value types (points, lines, segments, rays,
/// circles, arcs and measures) and the `Figure` union that wraps them.
pub mod figure;
/// Lazy sequences.
///
/// Defines finite, infinite and range sequences together with typed
/// concatenation and restartable enumeration. Nothing in this module ever
/// enumerates an unbounded sequence on its own.
pub mod sequence;

pub mod core;
