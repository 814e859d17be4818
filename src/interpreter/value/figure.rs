use crate::interpreter::value::core::format_number;

/// A location on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A non-negative length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measure {
    /// The length itself.
    pub value: f64,
}

impl Measure {
    /// Creates a measure. Negative inputs are folded to their magnitude.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value: value.abs() }
    }
}

/// An infinite line through two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// First point on the line.
    pub p1: Point,
    /// Second point on the line.
    pub p2: Point,
}

/// The part of a line between two endpoints, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub p1: Point,
    /// Second endpoint.
    pub p2: Point,
}

/// A half-line starting at `p1` and passing through `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin.
    pub p1: Point,
    /// A point that fixes the direction.
    pub p2: Point,
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: Measure,
}

/// A circular arc.
///
/// The arc runs counterclockwise from the ray `center → start` to the ray
/// `center → end`, at distance `radius` from the center. When both rays point
/// the same way the arc is the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// The center of the supporting circle.
    pub center: Point,
    /// A point on the ray where the arc starts.
    pub start:  Point,
    /// A point on the ray where the arc ends.
    pub end:    Point,
    /// The radius of the supporting circle.
    pub radius: Measure,
}

/// The seven kinds of figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// See [`Point`].
    Point,
    /// See [`Line`].
    Line,
    /// See [`Segment`].
    Segment,
    /// See [`Ray`].
    Ray,
    /// See [`Circle`].
    Circle,
    /// See [`Arc`].
    Arc,
    /// See [`Measure`].
    Measure,
}

impl std::fmt::Display for FigureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Segment => "segment",
            Self::Ray => "ray",
            Self::Circle => "circle",
            Self::Arc => "arc",
            Self::Measure => "measure",
        };
        write!(f, "{name}")
    }
}

/// Any geometric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    /// A point.
    Point(Point),
    /// A line.
    Line(Line),
    /// A segment.
    Segment(Segment),
    /// A ray.
    Ray(Ray),
    /// A circle.
    Circle(Circle),
    /// An arc.
    Arc(Arc),
    /// A measure.
    Measure(Measure),
}

impl Figure {
    /// Returns which kind of figure this is.
    #[must_use]
    pub const fn kind(&self) -> FigureKind {
        match self {
            Self::Point(_) => FigureKind::Point,
            Self::Line(_) => FigureKind::Line,
            Self::Segment(_) => FigureKind::Segment,
            Self::Ray(_) => FigureKind::Ray,
            Self::Circle(_) => FigureKind::Circle,
            Self::Arc(_) => FigureKind::Arc,
            Self::Measure(_) => FigureKind::Measure,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "point({}, {})", format_number(self.x), format_number(self.y))
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "measure({})", format_number(self.value))
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point(p) => write!(f, "{p}"),
            Self::Line(Line { p1, p2 }) => write!(f, "line({p1}, {p2})"),
            Self::Segment(Segment { p1, p2 }) => write!(f, "segment({p1}, {p2})"),
            Self::Ray(Ray { p1, p2 }) => write!(f, "ray({p1}, {p2})"),
            Self::Circle(Circle { center, radius }) => write!(f, "circle({center}, {radius})"),
            Self::Arc(Arc { center, start, end, radius }) => {
                write!(f, "arc({center}, {start}, {end}, {radius})")
            },
            Self::Measure(m) => write!(f, "{m}"),
        }
    }
}

impl From<Point> for Figure {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}
