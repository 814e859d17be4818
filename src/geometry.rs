use std::ops::{Add, Mul, Sub};

use crate::interpreter::value::figure::Point;

/// Containment predicates.
///
/// Decides whether a point lies on a line, segment, ray, circle or arc, up
/// to [`EPSILON`].
pub mod containment;
/// Intersections between figures.
///
/// Computes the points two figures share, dispatching every ordered pair of
/// figure kinds to one canonical implementation so the result does not
/// depend on operand order.
pub mod intersection;

pub use intersection::{Intersection, intersect};

/// Relative tolerance used by every geometric comparison.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` if `a` and `b` differ by at most [`EPSILON`] relative to
/// their magnitude.
///
/// # Example
/// ```
/// use geowalle::geometry::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * (1.0 + a.abs().max(b.abs()))
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Point {
    /// Dot product, treating both points as vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// The z component of the cross product, treating both points as vectors.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Length of the point seen as a vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Angle of the vector from `center` to `self`, in `(-π, π]`.
    #[must_use]
    pub fn angle_from(self, center: Self) -> f64 {
        let v = self - center;
        v.y.atan2(v.x)
    }

    /// Returns `true` if both coordinates are approximately equal.
    #[must_use]
    pub fn near(self, other: Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

/// Returns `true` if the vectors `d` and `v` are parallel, relative to their
/// lengths.
#[must_use]
pub fn is_parallel(d: Point, v: Point) -> bool {
    d.cross(v).abs() <= EPSILON * d.length().mul_add(v.length(), 1.0)
}
