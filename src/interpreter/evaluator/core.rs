use std::{collections::HashSet, path::PathBuf};

use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::function::random::StandardLibrary,
        renderer::Renderer,
        scope::Scope,
        value::{core::Value, sequence::Sequence},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Knobs that change how a run behaves without changing its program.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Seed for every random choice the run makes. `None` seeds from the
    /// operating system.
    pub seed:           Option<u64>,
    /// How deeply user functions may call each other before the run reports
    /// a stack overflow.
    pub max_call_depth: usize,
    /// Directory `import` paths are resolved against.
    pub import_root:    PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self { seed:           None,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH,
               import_root:    PathBuf::from("."), }
    }
}

/// Stores the runtime evaluation context of one run.
///
/// The context owns everything a program can observe or change: the scope
/// with its constants, functions and colors, the standard library with its
/// random state, and the renderer that receives draw and print calls.
/// Nothing is shared between runs.
pub struct Context<'r> {
    /// Bindings, functions and the color stack.
    pub scope:             Scope,
    /// Builtin state such as the random generator.
    pub library:           StandardLibrary,
    /// Where draw, print and error calls go.
    pub renderer:          &'r mut dyn Renderer,
    /// The settings the context was created with.
    pub settings:          Settings,
    pub(crate) call_depth: usize,
    pub(crate) imported:   HashSet<PathBuf>,
}

impl<'r> Context<'r> {
    /// Creates a context with default [`Settings`].
    pub fn new(renderer: &'r mut dyn Renderer) -> Self {
        Self::with_settings(renderer, Settings::default())
    }

    /// Creates a context whose random bounds follow the renderer's canvas.
    pub fn with_settings(renderer: &'r mut dyn Renderer, settings: Settings) -> Self {
        let library = StandardLibrary::new(renderer.canvas_width(),
                                           renderer.canvas_height(),
                                           settings.seed);
        Self { scope: Scope::new(),
               library,
               renderer,
               settings,
               call_depth: 0,
               imported: HashSet::new() }
    }

    /// Evaluates a whole program.
    ///
    /// Every instruction runs even if an earlier one failed: an error only
    /// aborts the instruction that raised it. Returns the value of the last
    /// instruction that produced one, together with every error raised.
    pub fn eval_program(&mut self, program: &[Statement]) -> (Option<Value>, Vec<RuntimeError>) {
        let mut result = None;
        let mut errors = Vec::new();

        for statement in program {
            match self.eval_statement(statement) {
                Ok(Some(value)) => result = Some(value),
                Ok(None) => {},
                Err(e) => {
                    debug!("instruction on line {} failed: {e}", statement.line_number());
                    errors.push(e);
                },
            }
        }

        (result, errors)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; operands are always evaluated
    /// left to right before an operator is applied.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Undefined { .. } => Ok(Value::Undefined),
            Expr::Constant { name, line } => self.scope.get(name, *line),
            Expr::Grouping { inner, .. } => self.eval(inner),
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.eval(expr)?;
                Self::eval_unary_op(*op, &operand, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary_op(*op, left, right, *line)
            },
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                line, } => {
                self.eval_conditional(condition, then_branch, else_branch, *line)
            },
            Expr::Let { instructions, body, .. } => self.eval_let(instructions, body),
            Expr::FunctionCall { name, arguments, line } => {
                let values = self.eval_arguments(arguments)?;
                self.eval_function(name, values, *line)
            },
            Expr::FigureDeclaration { kind, arguments, line } => {
                let values = self.eval_arguments(arguments)?;
                self.eval_function(&kind.to_string(), values, *line)
            },
            Expr::SequenceLiteral { elements, line } => {
                let values = self.eval_arguments(elements)?;
                Ok(Sequence::finite(values, *line)?.into())
            },
            Expr::InfiniteSequence { start, .. } => Ok(Sequence::infinite(*start).into()),
            Expr::RangeSequence { start, end, .. } => Ok(Sequence::range(*start, *end).into()),
        }
    }

    fn eval_arguments(&mut self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|argument| self.eval(argument)).collect()
    }
}
