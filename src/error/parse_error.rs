use super::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric literal immediately followed by letters, such as `12abc`.
    InvalidNumber {
        /// The offending text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A string literal reached the end of input without a closing quote.
    UnfinishedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token where it does not fit the grammar.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    Expected {
        /// What the parser was looking for.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function parameter was not a bare identifier.
    InvalidParameter {
        /// The function being declared.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The same parameter name appears twice in one declaration.
    DuplicateParameter {
        /// The function being declared.
        function:  String,
        /// The repeated parameter.
        parameter: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A function declaration appeared inside the body of another one.
    NestedFunctionDeclaration {
        /// The inner function.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `import` appeared after a non-import instruction.
    MisplacedImport {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `color` statement named an unknown color.
    InvalidColor {
        /// The name that was given.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A range or infinite sequence bound is not a non-negative integer.
    InvalidSequenceBound {
        /// The bound as written.
        bound: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the category this error is reported under.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedCharacter { .. }
            | Self::InvalidNumber { .. }
            | Self::UnfinishedString { .. } => ErrorKind::Lexical,
            _ => ErrorKind::Syntax,
        }
    }

    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnfinishedString { line }
            | Self::UnexpectedToken { line, .. }
            | Self::Expected { line, .. }
            | Self::InvalidParameter { line, .. }
            | Self::DuplicateParameter { line, .. }
            | Self::NestedFunctionDeclaration { line, .. }
            | Self::MisplacedImport { line }
            | Self::InvalidColor { line, .. }
            | Self::InvalidSequenceBound { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { lexeme, .. } => {
                write!(f, "Unexpected character '{lexeme}'.")
            },
            Self::InvalidNumber { lexeme, .. } => write!(f, "Invalid number '{lexeme}'."),
            Self::UnfinishedString { .. } => write!(f, "Unfinished string."),

            Self::UnexpectedToken { token, .. } => {
                write!(f, "Expected a valid expression but found '{token}'.")
            },
            Self::Expected { expected, found, .. } => {
                write!(f, "Expected {expected} but found '{found}'.")
            },
            Self::InvalidParameter { function, .. } => write!(f,
                                                              "Invalid declaration of function '{function}': parameters must be identifiers."),
            Self::DuplicateParameter { function, parameter, .. } => write!(f,
                                                                           "Function '{function}' declares parameter '{parameter}' more than once."),
            Self::NestedFunctionDeclaration { function, .. } => write!(f,
                                                                       "Function declarations cannot be nested ('{function}')."),
            Self::MisplacedImport { .. } => {
                write!(f, "Imports must appear before any other instruction.")
            },
            Self::InvalidColor { name, .. } => write!(f, "Invalid color '{name}'."),
            Self::InvalidSequenceBound { bound, .. } => write!(f,
                                                               "Sequence bound '{bound}' must be a non-negative integer."),
        }
    }
}

impl std::error::Error for ParseError {}
