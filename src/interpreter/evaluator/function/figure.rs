use crate::{
    geometry::{Intersection, intersect as intersect_figures},
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{expect_args, figure_arg, measure_arg, number_arg, point_arg},
        },
        value::{
            core::Value,
            figure::{Arc, Circle, Figure, Line, Point, Ray, Segment},
            sequence::Sequence,
        },
    },
};

/// Builds `point(x, y)`.
///
/// # Example
/// ```
/// use geowalle::interpreter::{
///     evaluator::function::figure::point,
///     value::{core::Value, figure::Point},
/// };
///
/// let p = point(&[Value::Number(1.0), Value::Number(2.0)], 1).unwrap();
/// assert_eq!(p, Value::from(Point::new(1.0, 2.0)));
/// ```
pub fn point(args: &[Value], line: usize) -> EvalResult<Value> {
    let [x, y] = expect_args::<2>("point", args, line)?;
    Ok(Point::new(number_arg("point", x, line)?, number_arg("point", y, line)?).into())
}

fn two_points(function: &str, args: &[Value], line: usize) -> EvalResult<(Point, Point)> {
    let [p1, p2] = expect_args::<2>(function, args, line)?;
    Ok((point_arg(function, p1, line)?, point_arg(function, p2, line)?))
}

/// Builds `line(p1, p2)`.
pub fn line(args: &[Value], line: usize) -> EvalResult<Value> {
    let (p1, p2) = two_points("line", args, line)?;
    Ok(Figure::Line(Line { p1, p2 }).into())
}

/// Builds `segment(p1, p2)`.
pub fn segment(args: &[Value], line: usize) -> EvalResult<Value> {
    let (p1, p2) = two_points("segment", args, line)?;
    Ok(Figure::Segment(Segment { p1, p2 }).into())
}

/// Builds `ray(p1, p2)`.
pub fn ray(args: &[Value], line: usize) -> EvalResult<Value> {
    let (p1, p2) = two_points("ray", args, line)?;
    Ok(Figure::Ray(Ray { p1, p2 }).into())
}

/// Builds `circle(center, radius)`.
pub fn circle(args: &[Value], line: usize) -> EvalResult<Value> {
    let [center, radius] = expect_args::<2>("circle", args, line)?;
    Ok(Figure::Circle(Circle { center: point_arg("circle", center, line)?,
                               radius: measure_arg("circle", radius, line)?, }).into())
}

/// Builds `arc(center, start, end, radius)`.
///
/// `start` and `end` only fix the directions of the two bounding rays; the
/// arc itself lies at `radius` from the center.
pub fn arc(args: &[Value], line: usize) -> EvalResult<Value> {
    let [center, start, end, radius] = expect_args::<4>("arc", args, line)?;
    Ok(Figure::Arc(Arc { center: point_arg("arc", center, line)?,
                         start:  point_arg("arc", start, line)?,
                         end:    point_arg("arc", end, line)?,
                         radius: measure_arg("arc", radius, line)?, }).into())
}

/// Intersects two figures.
///
/// Returns the finite sequence of shared points, which is empty when the
/// figures don't meet, or `undefined` when they share infinitely many
/// points.
///
/// # Example
/// ```
/// use geowalle::interpreter::{
///     evaluator::function::figure::{intersect, line, point},
///     value::core::Value,
/// };
///
/// let p = |x: f64, y: f64| point(&[Value::Number(x), Value::Number(y)], 1).unwrap();
/// let a = line(&[p(0.0, 0.0), p(1.0, 1.0)], 1).unwrap();
/// let b = line(&[p(0.0, 2.0), p(2.0, 0.0)], 1).unwrap();
///
/// let Value::Sequence(points) = intersect(&[a.clone(), b], 1).unwrap() else {
///     panic!("expected a sequence");
/// };
/// assert_eq!(points.iter().collect::<Vec<_>>(), vec![p(1.0, 1.0)]);
///
/// assert_eq!(intersect(&[a.clone(), a], 1).unwrap(), Value::Undefined);
/// ```
pub fn intersect(args: &[Value], line: usize) -> EvalResult<Value> {
    let [a, b] = expect_args::<2>("intersect", args, line)?;
    let (a, b) = (figure_arg("intersect", a, line)?, figure_arg("intersect", b, line)?);

    match intersect_figures(&a, &b) {
        Some(Intersection::Points(points)) => {
            Ok(Sequence::finite(points.into_iter().map(Value::from).collect(), line)?.into())
        },
        Some(Intersection::Coincident) | None => Ok(Value::Undefined),
    }
}
