//! # geowalle
//!
//! geowalle is an interpreter for G#, a small functional language for
//! describing geometric constructions. A program declares points, lines,
//! segments, rays, circles and arcs, combines them with arithmetic, lazy
//! sequences and user functions, and hands the figures it draws to a host
//! supplied [`Renderer`](interpreter::renderer::Renderer).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::panic::{AssertUnwindSafe, catch_unwind};

use log::{debug, warn};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Context, Settings},
        lexer::scan,
        parser::parse,
        renderer::Renderer,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and instruction types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating a program, sorted into the four kinds a report names:
/// lexical, syntax, semantic and runtime.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and messages for reporting.
/// - Formats the one-line reports a renderer shows.
pub mod error;
/// Plane geometry.
///
/// Containment predicates and the intersection of every pair of figure
/// kinds, with all comparisons done up to a small tolerance.
pub mod geometry;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the renderer interface.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a program and returns the value of its last expression instruction.
///
/// Nothing is reported to the renderer's error channel; errors are returned
/// instead. Draw and print instructions still reach the renderer.
///
/// Errors are gathered phase by phase. If scanning finds lexical errors, all
/// of them are returned and nothing is parsed. Likewise, syntax errors stop
/// the run before evaluation. During evaluation a failing instruction is
/// abandoned but the following ones still run, and every error is returned
/// at the end.
///
/// A program whose last value-producing instruction is missing yields
/// `Value::Undefined`.
///
/// # Errors
/// Returns every error the run produced, in order.
///
/// # Examples
/// ```
/// use geowalle::{get_result, interpreter::{renderer::NullRenderer, value::core::Value}};
///
/// let mut renderer = NullRenderer::default();
///
/// let res = get_result("3 + 4 * 2;", &mut renderer);
/// assert_eq!(res.unwrap(), Value::Number(11.0));
///
/// // 'x' is not defined.
/// let res = get_result("y = x + 1;", &mut renderer);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, renderer: &mut dyn Renderer) -> Result<Value, Vec<Error>> {
    get_result_with(source, renderer, Settings::default())
}

/// [`get_result`] with explicit [`Settings`].
///
/// # Errors
/// Returns every error the run produced, in order.
pub fn get_result_with(source: &str,
                       renderer: &mut dyn Renderer,
                       settings: Settings)
                       -> Result<Value, Vec<Error>> {
    let (tokens, lexical_errors) = scan(source);
    if !lexical_errors.is_empty() {
        return Err(lexical_errors.into_iter().map(Error::from).collect());
    }

    let (program, syntax_errors) = parse(&tokens);
    if !syntax_errors.is_empty() {
        return Err(syntax_errors.into_iter().map(Error::from).collect());
    }
    debug!("parsed {} instructions", program.len());

    let mut context = Context::with_settings(renderer, settings);
    let (result, runtime_errors) = context.eval_program(&program);
    if !runtime_errors.is_empty() {
        return Err(runtime_errors.into_iter().map(Error::from).collect());
    }

    Ok(result.unwrap_or(Value::Undefined))
}

/// Runs a program and reports every error through the renderer.
///
/// This is the entry point for hosts. Each error is passed to
/// [`Renderer::report_error`] as `! KIND ERROR at line n: message`. A panic
/// inside the interpreter is caught and reported with its raw message
/// instead of unwinding into the host.
///
/// # Example
/// ```
/// use geowalle::{execute, interpreter::renderer::NullRenderer};
///
/// let mut renderer = NullRenderer::default();
/// execute("x = 1; x = 2;", &mut renderer);
/// ```
pub fn execute(source: &str, renderer: &mut dyn Renderer) {
    execute_with(source, renderer, Settings::default());
}

/// [`execute`] with explicit [`Settings`].
pub fn execute_with(source: &str, renderer: &mut dyn Renderer, settings: Settings) {
    let outcome = catch_unwind(AssertUnwindSafe(|| get_result_with(source, &mut *renderer, settings)));

    let errors = match outcome {
        Ok(Ok(_)) => return,
        Ok(Err(errors)) => errors,
        Err(payload) => {
            let message = payload.downcast_ref::<&str>()
                                 .map(ToString::to_string)
                                 .or_else(|| payload.downcast_ref::<String>().cloned())
                                 .unwrap_or_else(|| "the interpreter stopped unexpectedly".to_string());
            warn!("recovered from interpreter panic: {message}");
            vec![Error::Host(message)]
        },
    };

    for error in errors {
        renderer.report_error(&error.report());
    }
}
