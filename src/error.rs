/// Lexing and parsing errors.
///
/// Defines the lexical and syntax errors the front end collects while it
/// scans and parses a program. Both phases keep going after an error, so a
/// single run can produce many of these.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the semantic and runtime errors raised while a program is being
/// evaluated: unknown identifiers, redeclarations, arity and type mismatches,
/// invalid sequence operations, and the like.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The four categories every reported error falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad characters or malformed literals.
    Lexical,
    /// Grammar violations.
    Syntax,
    /// Type, arity and identifier violations.
    Semantic,
    /// Failures only detectable while computing a value.
    Runtime,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => write!(f, "LEXICAL"),
            Self::Syntax => write!(f, "SYNTAX"),
            Self::Semantic => write!(f, "SEMANTIC"),
            Self::Runtime => write!(f, "RUNTIME"),
        }
    }
}

/// Any error a run can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lexical or syntax error.
    Parse(ParseError),
    /// A semantic or runtime error.
    Runtime(RuntimeError),
    /// An unexpected failure of the host, carrying its raw message.
    Host(String),
}

impl Error {
    /// Returns the category of the error, or `None` for host failures.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Parse(e) => Some(e.kind()),
            Self::Runtime(e) => Some(e.kind()),
            Self::Host(_) => None,
        }
    }

    /// Returns the source line of the error, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.line()),
            Self::Runtime(e) => Some(e.line()),
            Self::Host(_) => None,
        }
    }

    /// Formats the error as the one-line report handed to a renderer.
    ///
    /// # Example
    /// ```
    /// use geowalle::error::{Error, RuntimeError};
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero { line: 3 });
    /// assert_eq!(error.report(), "! RUNTIME ERROR at line 3: Division by zero.");
    ///
    /// let host = Error::Host("disk on fire".to_string());
    /// assert_eq!(host.report(), "disk on fire");
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        match (self.kind(), self.line()) {
            (Some(kind), Some(line)) => format!("! {kind} ERROR at line {line}: {self}"),
            (Some(kind), None) => format!("! {kind} ERROR: {self}"),
            _ => self.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Host(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
