use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::operand_mismatch, core::EvalResult},
        value::{
            core::Value,
            figure::{Figure, Measure},
        },
    },
};

/// Evaluates `left + right`.
///
/// `undefined` on either side yields the other operand unchanged. Besides
/// numbers, `+` joins strings, concatenates sequences lazily and adds
/// measures.
pub fn eval_add(left: Value, right: Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Undefined, other) | (other, Value::Undefined) => Ok(other),
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
        (Value::Sequence(a), Value::Sequence(b)) => Ok(a.concatenate(&b, line)?.into()),
        (Value::Figure(Figure::Measure(a)), Value::Figure(Figure::Measure(b))) => {
            Ok(Measure::new(a.value + b.value).into())
        },
        (left, right) => Err(operand_mismatch(BinaryOperator::Add, &left, &right, line)),
    }
}

/// Evaluates `-`, `*`, `/`, `%` and `^`.
///
/// Measures support `m - m` (the absolute difference), scaling by the
/// integer part of a number on either side, and `m / m`, which is a plain
/// number.
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Div, Mul, Sub};

    match (op, left, right) {
        (_, Value::Number(a), Value::Number(b)) => eval_numeric(op, *a, *b, line),
        (Sub, Value::Figure(Figure::Measure(a)), Value::Figure(Figure::Measure(b))) => {
            Ok(Measure::new(a.value - b.value).into())
        },
        (Mul, Value::Figure(Figure::Measure(m)), Value::Number(n))
        | (Mul, Value::Number(n), Value::Figure(Figure::Measure(m))) => {
            Ok(Measure::new(m.value * n.trunc()).into())
        },
        (Div, Value::Figure(Figure::Measure(a)), Value::Figure(Figure::Measure(b))) => {
            eval_numeric(Div, a.value, b.value, line)
        },
        _ => Err(operand_mismatch(op, left, right, line)),
    }
}

fn eval_numeric(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Div, Mod, Mul, Pow, Sub};

    let result = match op {
        Sub => a - b,
        Mul => a * b,
        Div | Mod if b == 0.0 => return Err(RuntimeError::DivisionByZero { line }),
        Div => a / b,
        Mod => a % b,
        Pow => a.powf(b),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("operator '{op}' is not arithmetic"),
                                                 line });
        },
    };
    Ok(Value::Number(result))
}
