use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::operand_mismatch, core::EvalResult},
        value::{core::Value, figure::Figure},
    },
};

/// Evaluates `<`, `>`, `<=` and `>=`.
///
/// Both operands must be numbers, or both must be measures.
///
/// # Example
/// ```
/// use geowalle::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::comparison::eval_comparison,
///         value::{core::Value, figure::Measure},
///     },
/// };
///
/// let less = eval_comparison(BinaryOperator::Less, &Value::Number(3.0), &Value::Number(5.0), 1);
/// assert_eq!(less.unwrap(), Value::Bool(true));
///
/// let short = Value::from(Measure::new(2.0));
/// let long = Value::from(Measure::new(7.0));
/// let longer = eval_comparison(BinaryOperator::GreaterEqual, &short, &long, 1);
/// assert_eq!(longer.unwrap(), Value::Bool(false));
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let (a, b) = match (left, right) {
        (Value::Number(a), Value::Number(b)) => (*a, *b),
        (Value::Figure(Figure::Measure(a)), Value::Figure(Figure::Measure(b))) => (a.value, b.value),
        _ => return Err(operand_mismatch(op, left, right, line)),
    };

    let result = match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::GreaterEqual => a >= b,
        _ => return Err(operand_mismatch(op, left, right, line)),
    };
    Ok(Value::Bool(result))
}

/// Decides `left == right`.
///
/// Values of different types are never equal. Values of the same type are
/// compared structurally, except sequences, which can't be compared.
pub fn eval_equality(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Sequence(_), Value::Sequence(_)) => {
            Err(RuntimeError::TypeError { details: "sequences can't be compared for equality".to_string(),
                                          line })
        },
        (a, b) if a.value_type() != b.value_type() => Ok(false),
        (a, b) => Ok(a == b),
    }
}

/// Evaluates `&` and `|`. Both operands are evaluated before this is called,
/// so neither operator short-circuits.
pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (a, b) = (left.as_bool(line)?, right.as_bool(line)?);
    match op {
        BinaryOperator::And => Ok(Value::Bool(a && b)),
        BinaryOperator::Or => Ok(Value::Bool(a || b)),
        _ => Err(operand_mismatch(op, left, right, line)),
    }
}
