/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the instructions of a program, evaluates their
/// expressions, manages bindings and the color stack, and sends figures to
/// the renderer.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles constants, functions, imports and random declarations.
/// - Reports semantic and runtime errors per instruction.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, string, identifier, keyword, operator or
/// separator. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their line.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports every lexical error instead of stopping at the first.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into instructions and expressions.
/// - Validates the grammar, reporting errors with their line.
/// - Recovers after an error so later mistakes are reported too.
pub mod parser;
/// The drawing surface a program talks to.
pub mod renderer;
/// Name resolution.
///
/// A stack of frames holding constants, arguments and functions, plus the
/// stack of drawing colors.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value a program can compute: numbers,
/// strings, booleans, `undefined`, figures and lazy sequences, along with
/// the drawing colors.
pub mod value;
