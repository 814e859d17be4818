use std::f64::consts::TAU;

use crate::{
    geometry::{EPSILON, approx_eq, is_parallel},
    interpreter::value::figure::{Arc, Circle, Figure, Line, Point, Ray, Segment},
};

/// Returns `true` if `p` lies on the infinite line through `line.p1` and
/// `line.p2`.
#[must_use]
pub fn is_in_line(p: Point, line: &Line) -> bool {
    is_parallel(line.p2 - line.p1, p - line.p1)
}

/// Returns `true` if `p` lies on the segment.
///
/// The point has to be inside the segment's bounding box, collinear with it,
/// and project to a parameter in `[0, 1]`.
///
/// # Example
/// ```
/// use geowalle::{
///     geometry::containment::is_in_segment,
///     interpreter::value::figure::{Point, Segment},
/// };
///
/// let s = Segment { p1: Point::new(0.0, 0.0),
///                   p2: Point::new(4.0, 2.0), };
/// assert!(is_in_segment(Point::new(2.0, 1.0), &s));
/// assert!(!is_in_segment(Point::new(6.0, 3.0), &s));
/// ```
#[must_use]
pub fn is_in_segment(p: Point, segment: &Segment) -> bool {
    let Segment { p1, p2 } = *segment;
    let slack = EPSILON * (1.0 + p1.length().max(p2.length()));

    let in_box = p.x >= p1.x.min(p2.x) - slack
                 && p.x <= p1.x.max(p2.x) + slack
                 && p.y >= p1.y.min(p2.y) - slack
                 && p.y <= p1.y.max(p2.y) + slack;
    if !in_box {
        return false;
    }

    let d = p2 - p1;
    let squared = d.dot(d);
    if squared <= EPSILON {
        return p.near(p1);
    }

    let t = (p - p1).dot(d) / squared;
    is_parallel(d, p - p1) && (-EPSILON..=1.0 + EPSILON).contains(&t)
}

/// Returns `true` if `p` lies on the ray: collinear with it and not behind
/// its origin.
#[must_use]
pub fn is_in_ray(p: Point, ray: &Ray) -> bool {
    let d = ray.p2 - ray.p1;
    let v = p - ray.p1;
    is_parallel(d, v) && v.dot(d) >= -EPSILON * d.length().mul_add(v.length(), 1.0)
}

/// Returns `true` if `p` lies on the circumference.
#[must_use]
pub fn is_in_circle(p: Point, circle: &Circle) -> bool {
    approx_eq(p.distance_to(circle.center), circle.radius.value)
}

/// Start angle and counterclockwise sweep of an arc, in radians.
///
/// The sweep is in `(0, 2π]`; an arc whose two rays coincide is the full
/// circle.
#[must_use]
pub fn arc_span(arc: &Arc) -> (f64, f64) {
    let start = arc.start.angle_from(arc.center);
    let end = arc.end.angle_from(arc.center);
    let sweep = (end - start).rem_euclid(TAU);
    if sweep <= EPSILON { (start, TAU) } else { (start, sweep) }
}

/// Returns `true` if the direction from the arc's center to `p` falls
/// inside the arc's angular interval.
///
/// Only the angle is checked; use [`contains`] to also require the point to
/// be on the supporting circle.
#[must_use]
pub fn is_in_arc(p: Point, arc: &Arc) -> bool {
    let (start, sweep) = arc_span(arc);
    let offset = (p.angle_from(arc.center) - start).rem_euclid(TAU);
    offset <= sweep + EPSILON || offset >= TAU - EPSILON
}

/// The circle an arc is drawn on.
#[must_use]
pub const fn supporting_circle(arc: &Arc) -> Circle {
    Circle { center: arc.center,
             radius: arc.radius, }
}

/// Returns `Some(true)` if `p` lies on `figure`, or `None` for measures,
/// which have no position.
#[must_use]
pub fn contains(figure: &Figure, p: Point) -> Option<bool> {
    let inside = match figure {
        Figure::Point(q) => q.near(p),
        Figure::Line(line) => is_in_line(p, line),
        Figure::Segment(segment) => is_in_segment(p, segment),
        Figure::Ray(ray) => is_in_ray(p, ray),
        Figure::Circle(circle) => is_in_circle(p, circle),
        Figure::Arc(arc) => is_in_circle(p, &supporting_circle(arc)) && is_in_arc(p, arc),
        Figure::Measure(_) => return None,
    };
    Some(inside)
}
