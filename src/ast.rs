use crate::interpreter::value::{color::Color, figure::FigureKind};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code: numbers (including `PI` and `E`), strings and booleans. The lexer
/// attaches one to every literal token and the parser copies it into the
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expressions always produce a value. Each variant carries the line it
/// started on so evaluation errors can point back at the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// The `undefined` keyword.
    Undefined {
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a constant or function argument by name.
    Constant {
        /// Name of the constant.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        inner: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if condition then a else b`.
    Conditional {
        /// The condition, which must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `let a; b; in body`, evaluated in a child frame.
    Let {
        /// Instructions run in order before the body.
        instructions: Vec<Statement>,
        /// The expression that gives the let its value.
        body:         Box<Self>,
        /// Line number in the source code.
        line:         usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A figure keyword used as a constructor, such as `point(1, 2)`.
    FigureDeclaration {
        /// The figure being built.
        kind:      FigureKind,
        /// Arguments to the constructor.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `{a, b, c}`.
    SequenceLiteral {
        /// Elements of the sequence.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `{start...}`.
    InfiniteSequence {
        /// The first element.
        start: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// `{start...end}`, both ends included.
    RangeSequence {
        /// The first element.
        start: f64,
        /// The last element.
        end:   f64,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use geowalle::ast::Expr;
    ///
    /// let expr = Expr::Constant { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Undefined { line }
            | Self::Constant { line, .. }
            | Self::Grouping { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Conditional { line, .. }
            | Self::Let { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::FigureDeclaration { line, .. }
            | Self::SequenceLiteral { line, .. }
            | Self::InfiniteSequence { line, .. }
            | Self::RangeSequence { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declaration such as `f(x, y) = x + y`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents an instruction: a top-level unit terminated by `;`, or one of
/// the instructions inside a `let`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = value`.
    Assignment {
        /// The name being bound.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `a, b, _ = sequence`.
    MultipleAssignment {
        /// The names being bound, in order.
        names: Vec<String>,
        /// An expression that must evaluate to a sequence.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// `import "file"`.
    Import {
        /// The path as written.
        path: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `draw expr "label"`.
    Draw {
        /// What to draw.
        expr:  Expr,
        /// Optional label shown next to the figure.
        label: Option<String>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expr "label"`.
    Print {
        /// What to print.
        expr:  Expr,
        /// Optional label printed before the value.
        label: Option<String>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `color red`.
    Color {
        /// The new drawing color.
        color: Color,
        /// Line number in the source code.
        line:  usize,
    },
    /// `restore`.
    Restore {
        /// Line number in the source code.
        line: usize,
    },
    /// `point p` or `circle sequence cs`: binds random figures.
    RandomDeclaration {
        /// The name being bound.
        name:        String,
        /// Which figure to generate.
        kind:        FigureKind,
        /// Whether a sequence of figures is generated instead of one.
        is_sequence: bool,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Function(def) => def.line,
            Self::Expression { line, .. }
            | Self::Assignment { line, .. }
            | Self::MultipleAssignment { line, .. }
            | Self::Import { line, .. }
            | Self::Draw { line, .. }
            | Self::Print { line, .. }
            | Self::Color { line, .. }
            | Self::Restore { line }
            | Self::RandomDeclaration { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and boolean logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&",
            Or => "|",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
