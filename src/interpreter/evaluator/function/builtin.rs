use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{expect_args, number_arg, point_arg, sequence_arg},
        },
        value::{core::Value, figure::Measure, sequence::Count},
    },
    util::num::usize_to_f64_checked,
};

/// Applies a one-argument floating point function to a number.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed number.
///
/// # Example
/// ```
/// use geowalle::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Number(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 1).unwrap();
///
/// assert_eq!(r, Value::Number(1.0));
/// ```
macro_rules! number_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            let [x] = expect_args::<1>(stringify!($fname), args, line)?;
            Ok(Value::Number(number_arg(stringify!($fname), x, line)?.$fname()))
        }
    };
}

number_builtin!(sqrt);
number_builtin!(sin);
number_builtin!(cos);
number_builtin!(exp);

/// Computes the logarithm of `value` in base `base`.
///
/// The value and the base must be positive and the base can't be 1.
///
/// # Example
/// ```
/// use geowalle::interpreter::{evaluator::function::builtin::log, value::core::Value};
///
/// let r = log(&[Value::Number(8.0), Value::Number(2.0)], 1).unwrap();
/// assert_eq!(r, Value::Number(3.0));
///
/// assert!(log(&[Value::Number(8.0), Value::Number(1.0)], 1).is_err());
/// ```
pub fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value, base] = expect_args::<2>("log", args, line)?;
    let value = number_arg("log", value, line)?;
    let base = number_arg("log", base, line)?;

    if value <= 0.0 || base <= 0.0 || base == 1.0 {
        return Err(RuntimeError::InvalidArgument { function: "log".to_string(),
                                                   details:  format!("log({value}, {base}) is undefined"),
                                                   line });
    }

    Ok(Value::Number(value.log(base)))
}

/// Returns the number of elements of a sequence, or `undefined` if it never
/// ends. Only the head counts are added up; nothing is enumerated.
pub fn count(args: &[Value], line: usize) -> EvalResult<Value> {
    let [sequence] = expect_args::<1>("count", args, line)?;
    match sequence_arg("count", sequence, line)?.total_count() {
        Count::Finite(n) => {
            let too_long = RuntimeError::InvalidArgument { function: "count".to_string(),
                                                           details:  "the sequence is too long to count".to_string(),
                                                           line };
            Ok(Value::Number(usize_to_f64_checked(n, too_long)?))
        },
        Count::Infinite => Ok(Value::Undefined),
    }
}

/// The distance between two points, as a measure.
pub fn measure(args: &[Value], line: usize) -> EvalResult<Value> {
    let [p1, p2] = expect_args::<2>("measure", args, line)?;
    let (p1, p2) = (point_arg("measure", p1, line)?, point_arg("measure", p2, line)?);
    Ok(Measure::new(p1.distance_to(p2)).into())
}
