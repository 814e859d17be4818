use std::f64::consts::TAU;

use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::RuntimeError,
    geometry::containment::arc_span,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{expect_args, figure_arg},
        },
        value::{
            core::Value,
            figure::{Arc, Circle, Figure, FigureKind, Line, Measure, Point, Ray, Segment},
            sequence::Sequence,
        },
    },
};

/// Random sequences have between `SEQUENCE_MIN` and `SEQUENCE_MAX - 1`
/// elements.
const SEQUENCE_MIN: usize = 2;
const SEQUENCE_MAX: usize = 20;

/// Builtin state that lives for one run.
///
/// Holds the random generator and the canvas size that bounds every random
/// coordinate, plus the fixed sequence `randoms()` returns.
#[derive(Debug, Clone)]
pub struct StandardLibrary {
    rng:     StdRng,
    width:   u32,
    height:  u32,
    randoms: Sequence,
}

impl StandardLibrary {
    /// Creates the library for a canvas of `width` by `height` units.
    ///
    /// With a seed, every random choice of the run is reproducible.
    ///
    /// # Example
    /// ```
    /// use geowalle::interpreter::evaluator::function::random::StandardLibrary;
    ///
    /// let mut a = StandardLibrary::new(100, 100, Some(7));
    /// let mut b = StandardLibrary::new(100, 100, Some(7));
    /// assert_eq!(a.randoms(), b.randoms());
    /// assert_eq!(a.random_point(), b.random_point());
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let amount = rng.gen_range(SEQUENCE_MIN..SEQUENCE_MAX);
        let numbers = (0..amount).map(|_| Value::Number(rng.r#gen::<f64>()))
                                  .collect::<Vec<_>>();
        let randoms = Sequence::finite(numbers, 0).unwrap_or_else(|_| Sequence::empty());

        Self { rng,
               width,
               height,
               randoms }
    }

    /// The numbers in `[0, 1)` drawn when the run started. Every call in the
    /// same run returns the same sequence.
    #[must_use]
    pub fn randoms(&self) -> Value {
        self.randoms.clone().into()
    }

    /// A point with whole coordinates inside the canvas.
    pub fn random_point(&mut self) -> Point {
        let x = self.rng.gen_range(0..self.width.max(1));
        let y = self.rng.gen_range(0..self.height.max(1));
        Point::new(f64::from(x), f64::from(y))
    }

    /// A whole measure below half the shorter side of the canvas.
    pub fn random_measure(&mut self) -> Measure {
        let limit = (self.width.min(self.height) / 2).max(1);
        Measure::new(f64::from(self.rng.gen_range(0..limit)))
    }

    /// A random figure of the given kind.
    pub fn random_figure(&mut self, kind: FigureKind) -> Figure {
        match kind {
            FigureKind::Point => Figure::Point(self.random_point()),
            FigureKind::Line => Figure::Line(Line { p1: self.random_point(),
                                                    p2: self.random_point(), }),
            FigureKind::Segment => Figure::Segment(Segment { p1: self.random_point(),
                                                             p2: self.random_point(), }),
            FigureKind::Ray => Figure::Ray(Ray { p1: self.random_point(),
                                                 p2: self.random_point(), }),
            FigureKind::Circle => Figure::Circle(Circle { center: self.random_point(),
                                                          radius: self.random_measure(), }),
            FigureKind::Arc => Figure::Arc(Arc { center: self.random_point(),
                                                 start:  self.random_point(),
                                                 end:    self.random_point(),
                                                 radius: self.random_measure(), }),
            FigureKind::Measure => Figure::Measure(self.random_measure()),
        }
    }

    /// A finite sequence of random figures of one kind.
    pub fn random_sequence(&mut self, kind: FigureKind, line: usize) -> EvalResult<Sequence> {
        let amount = self.rng.gen_range(SEQUENCE_MIN..SEQUENCE_MAX);
        trace!("{amount} random {kind} values");
        let figures = (0..amount).map(|_| Value::Figure(self.random_figure(kind)))
                                 .collect();
        Sequence::finite(figures, line)
    }

    /// Length of the canvas diagonal. Lines and rays are sampled this far
    /// from their first point.
    fn extent(&self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height)).max(1.0)
    }

    /// A random point lying on `figure`.
    ///
    /// Returns `Ok(None)` for measures.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidArgument` if the figure has no finite
    /// interval to sample from, such as a line through a NaN point.
    pub fn point_on(&mut self, figure: &Figure, line: usize) -> EvalResult<Option<Point>> {
        let point = match figure {
            Figure::Point(p) => *p,
            Figure::Segment(s) => self.along(s.p1, s.p2, 0.0, 1.0, line)?,
            Figure::Ray(r) => {
                let upper = self.extent() / r.p1.distance_to(r.p2);
                self.along(r.p1, r.p2, 0.0, upper, line)?
            },
            Figure::Line(l) => {
                let bound = self.extent() / l.p1.distance_to(l.p2);
                self.along(l.p1, l.p2, -bound, bound, line)?
            },
            Figure::Circle(c) => {
                let angle = self.rng.gen_range(0.0..TAU);
                c.center + Point::new(angle.cos(), angle.sin()) * c.radius.value
            },
            Figure::Arc(a) => {
                let (start, sweep) = arc_span(a);
                let angle = start + sample(&mut self.rng, 0.0, sweep, line)?;
                a.center + Point::new(angle.cos(), angle.sin()) * a.radius.value
            },
            Figure::Measure(_) => return Ok(None),
        };
        Ok(Some(point))
    }

    /// A point `p1 + (p2 - p1) * t` for a random `t` in `lower..=upper`.
    ///
    /// Coincident endpoints yield `p1`.
    fn along(&mut self, p1: Point, p2: Point, lower: f64, upper: f64, line: usize)
             -> EvalResult<Point> {
        let direction = p2 - p1;
        if direction.length() == 0.0 {
            return Ok(p1);
        }
        let t = sample(&mut self.rng, lower, upper, line)?;
        Ok(p1 + direction * t)
    }
}

/// Draws a number from `lower..=upper`.
///
/// `gen_range` panics on a non-finite or inverted range, so those are
/// rejected first.
fn sample(rng: &mut StdRng, lower: f64, upper: f64, line: usize) -> EvalResult<f64> {
    if !lower.is_finite() || !upper.is_finite() || lower > upper {
        let details = "the figure has no finite extent to sample".to_string();
        return Err(RuntimeError::InvalidArgument { function: "points".to_string(),
                                                   details,
                                                   line });
    }
    Ok(rng.gen_range(lower..=upper))
}

/// `randoms()`.
pub fn randoms(library: &mut StandardLibrary, args: &[Value], line: usize) -> EvalResult<Value> {
    expect_args::<0>("randoms", args, line)?;
    Ok(library.randoms())
}

/// `samples()`: a fresh finite sequence of random points.
pub fn samples(library: &mut StandardLibrary, args: &[Value], line: usize) -> EvalResult<Value> {
    expect_args::<0>("samples", args, line)?;
    Ok(library.random_sequence(FigureKind::Point, line)?.into())
}

/// `points(figure)`: one random point on the figure.
pub fn points(library: &mut StandardLibrary, args: &[Value], line: usize) -> EvalResult<Value> {
    let [figure] = expect_args::<1>("points", args, line)?;
    let figure = figure_arg("points", figure, line)?;
    Ok(library.point_on(&figure, line)?.map_or(Value::Undefined, Value::from))
}
