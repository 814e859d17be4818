use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{
                builtin, figure,
                random::{self, StandardLibrary},
            },
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the standard library state, a slice of evaluated
/// argument values and the line number. Pure builtins ignore the library.
type BuiltinFn = fn(&mut StandardLibrary, &[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"      => { arity: 1, func: |_, args, line| builtin::sqrt(args, line) },
    "sin"       => { arity: 1, func: |_, args, line| builtin::sin(args, line) },
    "cos"       => { arity: 1, func: |_, args, line| builtin::cos(args, line) },
    "exp"       => { arity: 1, func: |_, args, line| builtin::exp(args, line) },
    "log"       => { arity: 2, func: |_, args, line| builtin::log(args, line) },
    "count"     => { arity: 1, func: |_, args, line| builtin::count(args, line) },
    "measure"   => { arity: 2, func: |_, args, line| builtin::measure(args, line) },
    "point"     => { arity: 2, func: |_, args, line| figure::point(args, line) },
    "line"      => { arity: 2, func: |_, args, line| figure::line(args, line) },
    "segment"   => { arity: 2, func: |_, args, line| figure::segment(args, line) },
    "ray"       => { arity: 2, func: |_, args, line| figure::ray(args, line) },
    "circle"    => { arity: 2, func: |_, args, line| figure::circle(args, line) },
    "arc"       => { arity: 4, func: |_, args, line| figure::arc(args, line) },
    "intersect" => { arity: 2, func: |_, args, line| figure::intersect(args, line) },
    "randoms"   => { arity: 0, func: random::randoms },
    "samples"   => { arity: 0, func: random::samples },
    "points"    => { arity: 1, func: random::points },
}

/// Returns `true` if `name` is a builtin function.
///
/// # Example
/// ```
/// use geowalle::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("intersect"));
/// assert!(!is_builtin("fib"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it verifies arity and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arg_vals`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function(&mut self,
                                name: &str,
                                arg_vals: Vec<Value>,
                                line: usize)
                                -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if builtin.arity != arg_vals.len() {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: builtin.arity.to_string(),
                                                                 found: arg_vals.len(),
                                                                 line });
            }
            return (builtin.func)(&mut self.library, &arg_vals, line);
        }

        self.call_user_defined_function(name, arg_vals, line)
    }

    /// Executes a user-defined function.
    ///
    /// The function is looked up in the active frame. Its parameter count
    /// must match the number of supplied arguments. The body runs in a child
    /// frame where each parameter is bound as an argument, so it also sees
    /// every binding of the caller.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Calls nested deeper than `Settings::max_call_depth`.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  arg_vals: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        let func = self.scope
                       .get_function(name)
                       .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                      line })?;

        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: func.params.len().to_string(),
                                                             found: arg_vals.len(),
                                                             line });
        }

        if self.call_depth >= self.settings.max_call_depth {
            return Err(RuntimeError::StackOverflow { depth: self.call_depth,
                                                     line });
        }

        trace!("call {name} at depth {}", self.call_depth);
        self.call_depth += 1;
        let result = self.in_frame(|context| {
                             for (param, value) in func.params.iter().zip(arg_vals) {
                                 context.scope.set_argument(param, value);
                             }
                             context.eval(&func.body)
                         });
        self.call_depth -= 1;
        result
    }
}

/// Ensures that a user-defined function name is valid.
///
/// A function name is rejected if it is a builtin. Declaring the same name
/// twice in one frame is caught by the scope.
///
/// # Parameters
/// - `name`: Name to validate.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Ok(())` if the name is allowed, otherwise an error.
pub fn validate_function_name(name: &str, line: usize) -> EvalResult<()> {
    if is_builtin(name) {
        return Err(RuntimeError::BuiltinFunctionRedefinition { name: name.to_string(),
                                                               line });
    }
    Ok(())
}
