use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{eval_add, eval_arithmetic},
                comparison::{eval_comparison, eval_equality, eval_logic},
            },
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// `+` goes to the addition handler, which also concatenates strings and
    /// sequences. The other arithmetic operators, the orderings, equality and
    /// the boolean operators each have their own handler.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use geowalle::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary_op(BinaryOperator::Add, Value::Number(3.0), Value::Number(4.0), 1);
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let absorbed = Context::eval_binary_op(BinaryOperator::Add, Value::Undefined, Value::Number(4.0), 1);
    /// assert_eq!(absorbed.unwrap(), Value::Number(4.0));
    /// ```
    pub fn eval_binary_op(op: BinaryOperator,
                          left: Value,
                          right: Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        match op {
            Add => eval_add(left, right, line),
            Sub | Mul | Div | Mod | Pow => eval_arithmetic(op, &left, &right, line),
            Less | Greater | LessEqual | GreaterEqual => eval_comparison(op, &left, &right, line),
            Equal => Ok(Value::Bool(eval_equality(&left, &right, line)?)),
            NotEqual => Ok(Value::Bool(!eval_equality(&left, &right, line)?)),
            And | Or => eval_logic(op, &left, &right, line),
        }
    }
}

/// Builds the error for an operator that does not accept these operand
/// types.
pub(super) fn operand_mismatch(op: BinaryOperator,
                               left: &Value,
                               right: &Value,
                               line: usize)
                               -> RuntimeError {
    RuntimeError::TypeError { details: format!("operator '{op}' can't be applied to {} and {}",
                                               left.value_type(),
                                               right.value_type()),
                              line }
}
