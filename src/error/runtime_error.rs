use super::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a constant that is not bound.
    UnknownConstant {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to bind a constant that already exists in the active frame.
    ConstantRedeclaration {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to define a function that already exists in the active frame.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to redefine a built-in function.
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted arities.
        expected: String,
        /// The number of arguments actually given.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function received an argument of the wrong type or domain.
    InvalidArgument {
        /// The name of the function.
        function: String,
        /// Description of what went wrong.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `draw` was given something that is not a drawable figure.
    NotDrawable {
        /// The type that was found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A sequence was required.
    ExpectedSequence {
        /// The type that was found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A sequence literal mixes element types.
    MixedSequence {
        /// The element type fixed by the first element.
        expected: String,
        /// The offending element type.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Two sequences with different element types were concatenated.
    ConcatenationMismatch {
        /// Element type of the right-hand sequence.
        appended: String,
        /// Element type of the receiving sequence.
        receiver: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operation would have to enumerate an unbounded sequence.
    InfiniteSequence {
        /// The operation that was attempted.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An imported file could not be read or contained errors.
    ImportFailed {
        /// The requested path.
        path:    String,
        /// Why the import failed.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator was applied to operands of the wrong types.
    TypeError {
        /// Description of the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A condition did not evaluate to a boolean.
    ExpectedBoolean {
        /// The type that was found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// User function calls nested deeper than the configured limit.
    StackOverflow {
        /// The configured limit.
        depth: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the category this error is reported under.
    ///
    /// Identifier, arity and argument-type violations are semantic; operator
    /// mismatches and failures that depend on computed values are runtime
    /// errors.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeError { .. }
            | Self::ExpectedBoolean { .. }
            | Self::DivisionByZero { .. }
            | Self::StackOverflow { .. } => ErrorKind::Runtime,
            _ => ErrorKind::Semantic,
        }
    }

    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownConstant { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::ConstantRedeclaration { line, .. }
            | Self::FunctionAlreadyDefined { line, .. }
            | Self::BuiltinFunctionRedefinition { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::NotDrawable { line, .. }
            | Self::ExpectedSequence { line, .. }
            | Self::MixedSequence { line, .. }
            | Self::ConcatenationMismatch { line, .. }
            | Self::InfiniteSequence { line, .. }
            | Self::ImportFailed { line, .. }
            | Self::TypeError { line, .. }
            | Self::ExpectedBoolean { line, .. }
            | Self::DivisionByZero { line }
            | Self::StackOverflow { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownConstant { name, .. } => write!(f, "Constant '{name}' doesn't exist."),
            Self::UnknownFunction { name, .. } => write!(f, "Function '{name}' doesn't exist."),
            Self::ConstantRedeclaration { name, .. } => write!(f,
                                                               "Another constant named '{name}' already exists and can't be altered."),
            Self::FunctionAlreadyDefined { name, .. } => {
                write!(f, "Function '{name}' is already defined.")
            },
            Self::BuiltinFunctionRedefinition { name, .. } => {
                write!(f, "'{name}' is a built-in function and can't be redefined.")
            },
            Self::ArgumentCountMismatch { name, expected, found, .. } => write!(f,
                                                                                "Function '{name}' expects {expected} argument(s) but received {found}."),
            Self::InvalidArgument { function, details, .. } => {
                write!(f, "Invalid argument for '{function}': {details}.")
            },
            Self::NotDrawable { found, .. } => write!(f, "Can't draw a value of type {found}."),
            Self::ExpectedSequence { found, .. } => {
                write!(f, "Expected a sequence but found {found}.")
            },
            Self::MixedSequence { expected, found, .. } => write!(f,
                                                                  "A sequence of type {expected} can't contain an element of type {found}."),
            Self::ConcatenationMismatch { appended, receiver, .. } => write!(f,
                                                                             "Cannot concatenate a sequence of type {appended} to a sequence of type {receiver}."),
            Self::InfiniteSequence { operation, .. } => {
                write!(f, "Can't {operation} an infinite sequence.")
            },
            Self::ImportFailed { path, details, .. } => {
                write!(f, "Could not import '{path}': {details}.")
            },

            Self::TypeError { details, .. } => write!(f, "Type error: {details}."),
            Self::ExpectedBoolean { found, .. } => {
                write!(f, "Condition must be boolean but found {found}.")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::StackOverflow { depth, .. } => {
                write!(f, "Stack overflow: more than {depth} nested function calls.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
