use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            figure::{Figure, FigureKind, Measure, Point},
            sequence::Sequence,
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Library
/// functions and operators pattern-match on it rather than inspecting types
/// at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by
    /// conditions.
    Bool(bool),
    /// The absence of a meaningful value. Also stands for "infinitely many
    /// intersection points".
    Undefined,
    /// A geometric value.
    Figure(Figure),
    /// A possibly infinite sequence of values of one type.
    Sequence(Sequence),
}

/// The runtime type of a [`Value`], used for sequence homogeneity and in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// [`Value::Number`]
    Number,
    /// [`Value::Str`]
    Str,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Undefined`]
    Undefined,
    /// [`Value::Figure`] of the given kind.
    Figure(FigureKind),
    /// [`Value::Sequence`]
    Sequence,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Str => write!(f, "string"),
            Self::Bool => write!(f, "boolean"),
            Self::Undefined => write!(f, "undefined"),
            Self::Figure(kind) => write!(f, "{kind}"),
            Self::Sequence => write!(f, "sequence"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Figure> for Value {
    fn from(v: Figure) -> Self {
        Self::Figure(v)
    }
}

impl From<Point> for Value {
    fn from(v: Point) -> Self {
        Self::Figure(Figure::Point(v))
    }
}

impl From<Measure> for Value {
    fn from(v: Measure) -> Self {
        Self::Figure(Figure::Measure(v))
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Self::Sequence(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Returns the runtime type of the value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Str(_) => ValueType::Str,
            Self::Bool(_) => ValueType::Bool,
            Self::Undefined => ValueType::Undefined,
            Self::Figure(figure) => ValueType::Figure(figure.kind()),
            Self::Sequence(_) => ValueType::Sequence,
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions in `if` expressions and logical operations.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(RuntimeError::ExpectedBoolean { found: other.value_type().to_string(),
                                                         line }),
        }
    }

    /// Borrows the value as a sequence, or returns an error.
    ///
    /// # Returns
    /// - `Ok(&Sequence)`: If the value is a sequence.
    /// - `Err(RuntimeError::ExpectedSequence)`: Otherwise.
    pub fn as_sequence(&self, line: usize) -> EvalResult<&Sequence> {
        match self {
            Self::Sequence(s) => Ok(s),
            other => Err(RuntimeError::ExpectedSequence { found: other.value_type().to_string(),
                                                          line }),
        }
    }
}

/// Formats a number the way the language prints it: whole numbers without
/// a fractional part.
///
/// # Example
/// ```
/// use geowalle::interpreter::value::core::format_number;
///
/// assert_eq!(format_number(11.0), "11");
/// assert_eq!(format_number(-2.5), "-2.5");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Undefined => write!(f, "undefined"),
            Self::Figure(figure) => write!(f, "{figure}"),
            Self::Sequence(sequence) => write!(f, "{sequence}"),
        }
    }
}
