use std::f64::consts::TAU;

use ordered_float::OrderedFloat;

use crate::{
    geometry::{
        EPSILON, approx_eq,
        containment::{arc_span, contains, is_in_arc, supporting_circle},
        is_parallel,
    },
    interpreter::value::figure::{Arc, Circle, Figure, Point},
};

/// What two figures have in common.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// Finitely many shared points, possibly none.
    Points(Vec<Point>),
    /// The figures overlap along a continuum, such as two equal circles or
    /// two overlapping collinear segments.
    Coincident,
}

impl Intersection {
    const fn empty() -> Self {
        Self::Points(Vec::new())
    }

    /// The shared points, or `None` for a coincident result.
    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Self::Points(points) => Some(points),
            Self::Coincident => None,
        }
    }

    fn retain(self, keep: impl Fn(Point) -> bool) -> Self {
        match self {
            Self::Points(mut points) => {
                points.retain(|p| keep(*p));
                Self::Points(points)
            },
            Self::Coincident => Self::Coincident,
        }
    }

    /// Orders points by `x` then `y` and merges near duplicates, so the
    /// result does not depend on which operand came first.
    fn normalized(self) -> Self {
        match self {
            Self::Points(mut points) => {
                points.sort_by_key(|p| (OrderedFloat(p.x), OrderedFloat(p.y)));
                points.dedup_by(|a, b| a.near(*b));
                Self::Points(points)
            },
            Self::Coincident => Self::Coincident,
        }
    }
}

/// A line, segment or ray written as `origin + t * direction` with `t`
/// restricted to `[lower, upper]`.
#[derive(Debug, Clone, Copy)]
struct Linear {
    origin:    Point,
    direction: Point,
    lower:     f64,
    upper:     f64,
}

impl Linear {
    fn of(figure: &Figure) -> Option<Self> {
        let (p1, p2, lower, upper) = match figure {
            Figure::Line(l) => (l.p1, l.p2, f64::NEG_INFINITY, f64::INFINITY),
            Figure::Segment(s) => (s.p1, s.p2, 0.0, 1.0),
            Figure::Ray(r) => (r.p1, r.p2, 0.0, f64::INFINITY),
            _ => return None,
        };
        Some(Self { origin: p1,
                    direction: p2 - p1,
                    lower,
                    upper })
    }

    fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    fn admits(&self, t: f64) -> bool {
        t >= self.lower - EPSILON && t <= self.upper + EPSILON
    }

    fn is_degenerate(&self) -> bool {
        self.direction.length() <= EPSILON
    }

    fn holds(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return p.near(self.origin);
        }
        let v = p - self.origin;
        is_parallel(self.direction, v) && self.admits(v.dot(self.direction) / self.direction.dot(self.direction))
    }
}

fn point_at_angle(center: Point, radius: f64, angle: f64) -> Point {
    center + Point::new(angle.cos(), angle.sin()) * radius
}

/// Intersects two linear figures.
///
/// Crossing figures meet where the parametric forms agree (Cramer's rule).
/// Collinear ones are compared by mapping the second figure's parameter
/// bounds onto the first: an overlap of positive length is a coincidence and
/// a zero-length overlap is a single touching point.
fn linear_linear(a: Linear, b: Linear) -> Intersection {
    if a.is_degenerate() {
        return Intersection::Points(if b.holds(a.origin) { vec![a.origin] } else { vec![] });
    }
    if b.is_degenerate() {
        return Intersection::Points(if a.holds(b.origin) { vec![b.origin] } else { vec![] });
    }

    let offset = b.origin - a.origin;

    if !is_parallel(a.direction, b.direction) {
        let denominator = a.direction.cross(b.direction);
        let t = offset.cross(b.direction) / denominator;
        let u = offset.cross(a.direction) / denominator;
        return if a.admits(t) && b.admits(u) {
            Intersection::Points(vec![a.at(t)])
        } else {
            Intersection::empty()
        };
    }

    if !is_parallel(a.direction, offset) {
        return Intersection::empty();
    }

    let squared = a.direction.dot(a.direction);
    let shift = offset.dot(a.direction) / squared;
    let scale = b.direction.dot(a.direction) / squared;
    let (from, to) = (scale.mul_add(b.lower, shift), scale.mul_add(b.upper, shift));

    let lower = from.min(to).max(a.lower);
    let upper = from.max(to).min(a.upper);

    if lower > upper + EPSILON {
        Intersection::empty()
    } else if upper - lower <= EPSILON {
        Intersection::Points(vec![a.at(lower)])
    } else {
        Intersection::Coincident
    }
}

/// Intersects a linear figure with a circle by projecting the center onto
/// the supporting line and walking half a chord each way. The lower
/// parameter comes first.
fn linear_circle(linear: Linear, circle: &Circle) -> Intersection {
    let r = circle.radius.value;

    if linear.is_degenerate() {
        let on_circle = approx_eq(linear.origin.distance_to(circle.center), r);
        return Intersection::Points(if on_circle { vec![linear.origin] } else { vec![] });
    }

    let squared = linear.direction.dot(linear.direction);
    let t0 = (circle.center - linear.origin).dot(linear.direction) / squared;
    let foot = linear.at(t0);
    let distance = foot.distance_to(circle.center);
    let half_chord_squared = r.mul_add(r, -(distance * distance));
    let tolerance = EPSILON * r.mul_add(r, 1.0);

    let parameters = if half_chord_squared < -tolerance {
        vec![]
    } else if half_chord_squared <= tolerance {
        vec![t0]
    } else {
        let offset = half_chord_squared.sqrt() / squared.sqrt();
        vec![t0 - offset, t0 + offset]
    };

    Intersection::Points(parameters.into_iter()
                                   .filter(|t| linear.admits(*t))
                                   .map(|t| linear.at(t))
                                   .collect())
}

/// Intersects two circles.
///
/// Equal circles coincide. Concentric, separate and nested circles share
/// nothing. Tangent circles share one point and the rest share two, found
/// on the radical line.
fn circle_circle(a: &Circle, b: &Circle) -> Intersection {
    let (r1, r2) = (a.radius.value, b.radius.value);
    let d = a.center.distance_to(b.center);
    let tolerance = EPSILON * (1.0 + r1 + r2);

    if d <= tolerance {
        return if approx_eq(r1, r2) { Intersection::Coincident } else { Intersection::empty() };
    }
    if d > r1 + r2 + tolerance || d < (r1 - r2).abs() - tolerance {
        return Intersection::empty();
    }

    let along = (r1.mul_add(r1, -(r2 * r2)) + d * d) / (2.0 * d);
    let height_squared = r1.mul_add(r1, -(along * along));
    let unit = (b.center - a.center) * (1.0 / d);
    let base = a.center + unit * along;

    if height_squared <= EPSILON * r1.mul_add(r1, 1.0) {
        return Intersection::Points(vec![base]);
    }

    let normal = Point::new(-unit.y, unit.x) * height_squared.sqrt();
    Intersection::Points(vec![base + normal, base - normal])
}

/// Intersects two arcs. Arcs on the same circle are compared by angle.
fn arc_arc(a: &Arc, b: &Arc) -> Intersection {
    let same_circle = a.center.near(b.center) && approx_eq(a.radius.value, b.radius.value);
    if !same_circle {
        return circle_circle(&supporting_circle(a), &supporting_circle(b)).retain(|p| {
                                                                             is_in_arc(p, a)
                                                                             && is_in_arc(p, b)
                                                                         });
    }

    let (start_a, sweep_a) = arc_span(a);
    let (start_b, sweep_b) = arc_span(b);
    let delta = (start_b - start_a).rem_euclid(TAU);

    let mut points = Vec::new();
    for (from, to) in [(delta, delta + sweep_b), (delta - TAU, delta + sweep_b - TAU)] {
        let lower = from.max(0.0);
        let upper = to.min(sweep_a);
        if upper - lower > EPSILON {
            return Intersection::Coincident;
        }
        if upper - lower >= -EPSILON {
            points.push(point_at_angle(a.center, a.radius.value, start_a + lower));
        }
    }
    Intersection::Points(points)
}

/// Computes the points two figures share.
///
/// Every ordered pair of the six positional figure kinds is handled, and
/// swapping the operands gives the same result. Points come back sorted by
/// `x` then `y` without duplicates. Returns `None` if either figure is a
/// measure, which has no position.
///
/// # Example
/// ```
/// use geowalle::{
///     geometry::{Intersection, intersect},
///     interpreter::value::figure::{Circle, Figure, Line, Measure, Point},
/// };
///
/// let line = Figure::Line(Line { p1: Point::new(-2.0, -2.0),
///                                p2: Point::new(2.0, 2.0), });
/// let circle = Figure::Circle(Circle { center: Point::new(0.0, 0.0),
///                                      radius: Measure::new(2f64.sqrt()), });
///
/// let Some(Intersection::Points(points)) = intersect(&line, &circle) else {
///     panic!("expected points");
/// };
/// assert_eq!(points.len(), 2);
/// assert!(points[0].near(Point::new(-1.0, -1.0)));
/// assert!(points[1].near(Point::new(1.0, 1.0)));
///
/// assert_eq!(intersect(&line, &line), Some(Intersection::Coincident));
/// ```
#[must_use]
pub fn intersect(a: &Figure, b: &Figure) -> Option<Intersection> {
    use Figure as F;

    let result = match (a, b) {
        (F::Measure(_), _) | (_, F::Measure(_)) => return None,
        (F::Point(p), other) | (other, F::Point(p)) => {
            Intersection::Points(if contains(other, *p) == Some(true) { vec![*p] } else { vec![] })
        },
        (F::Circle(c1), F::Circle(c2)) => circle_circle(c1, c2),
        (F::Circle(circle), F::Arc(arc)) | (F::Arc(arc), F::Circle(circle)) => {
            circle_circle(circle, &supporting_circle(arc)).retain(|p| is_in_arc(p, arc))
        },
        (F::Arc(a1), F::Arc(a2)) => arc_arc(a1, a2),
        (F::Circle(circle), other) | (other, F::Circle(circle)) => {
            linear_circle(Linear::of(other)?, circle)
        },
        (F::Arc(arc), other) | (other, F::Arc(arc)) => {
            linear_circle(Linear::of(other)?, &supporting_circle(arc)).retain(|p| is_in_arc(p, arc))
        },
        (first, second) => linear_linear(Linear::of(first)?, Linear::of(second)?),
    };

    Some(result.normalized())
}
