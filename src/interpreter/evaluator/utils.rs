use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            figure::{Figure, Measure, Point},
            sequence::Sequence,
        },
    },
};

impl Context<'_> {
    /// Runs `body` inside a fresh child frame.
    ///
    /// The frame is popped whether `body` succeeds or fails, so bindings
    /// made inside never outlive the call or `let` that made them.
    pub(crate) fn in_frame<T>(&mut self,
                              body: impl FnOnce(&mut Self) -> EvalResult<T>)
                              -> EvalResult<T> {
        self.scope.enter();
        let result = body(self);
        self.scope.exit();
        result
    }

    /// Evaluates `if condition then a else b`. Only the chosen branch is
    /// evaluated.
    pub(crate) fn eval_conditional(&mut self,
                                   condition: &Expr,
                                   then_branch: &Expr,
                                   else_branch: &Expr,
                                   line: usize)
                                   -> EvalResult<Value> {
        if self.eval(condition)?.as_bool(line)? {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }

    /// Evaluates `let instructions in body` in a child frame.
    pub(crate) fn eval_let(&mut self, instructions: &[Statement], body: &Expr) -> EvalResult<Value> {
        self.in_frame(|context| {
                for instruction in instructions {
                    context.eval_statement(instruction)?;
                }
                context.eval(body)
            })
    }
}

/// Destructures `args` into exactly `N` values.
///
/// # Errors
/// Returns `RuntimeError::ArgumentCountMismatch` if the count differs.
///
/// # Example
/// ```
/// use geowalle::interpreter::{evaluator::utils::expect_args, value::core::Value};
///
/// let args = [Value::Number(1.0), Value::Number(2.0)];
/// let [a, b] = expect_args::<2>("pair", &args, 1).unwrap();
/// assert_eq!((a, b), (&Value::Number(1.0), &Value::Number(2.0)));
///
/// assert!(expect_args::<1>("single", &args, 1).is_err());
/// ```
pub fn expect_args<'v, const N: usize>(function: &str,
                                       args: &'v [Value],
                                       line: usize)
                                       -> EvalResult<&'v [Value; N]> {
    <&[Value; N]>::try_from(args).map_err(|_| RuntimeError::ArgumentCountMismatch { name: function.to_string(),
                                                                                 expected: N.to_string(),
                                                                                 found: args.len(),
                                                                                 line })
}

fn invalid(function: &str, expected: &str, found: &Value, line: usize) -> RuntimeError {
    RuntimeError::InvalidArgument { function: function.to_string(),
                                    details: format!("expected {expected} but found {}",
                                                     found.value_type()),
                                    line }
}

/// Reads a number argument.
pub fn number_arg(function: &str, value: &Value, line: usize) -> EvalResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(invalid(function, "a number", other, line)),
    }
}

/// Reads a point argument.
pub fn point_arg(function: &str, value: &Value, line: usize) -> EvalResult<Point> {
    match value {
        Value::Figure(Figure::Point(p)) => Ok(*p),
        other => Err(invalid(function, "a point", other, line)),
    }
}

/// Reads a measure argument.
pub fn measure_arg(function: &str, value: &Value, line: usize) -> EvalResult<Measure> {
    match value {
        Value::Figure(Figure::Measure(m)) => Ok(*m),
        other => Err(invalid(function, "a measure", other, line)),
    }
}

/// Reads a figure argument that has a position, which excludes measures.
pub fn figure_arg(function: &str, value: &Value, line: usize) -> EvalResult<Figure> {
    match value {
        Value::Figure(figure) if !matches!(figure, Figure::Measure(_)) => Ok(*figure),
        other => Err(invalid(function, "a point, line, segment, ray, circle or arc", other, line)),
    }
}

/// Reads a sequence argument.
pub fn sequence_arg<'v>(function: &str, value: &'v Value, line: usize) -> EvalResult<&'v Sequence> {
    match value {
        Value::Sequence(s) => Ok(s),
        other => Err(invalid(function, "a sequence", other, line)),
    }
}
