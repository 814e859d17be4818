use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical,
            statement::parse_instruction,
            utils::{expect, peek_kind},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Every instruction must end with `;`. When an instruction fails to parse,
/// its error is recorded and the parser skips to just past the next `;`, so
/// one mistake doesn't hide the ones after it.
///
/// # Parameters
/// - `tokens`: The output of [`scan`](crate::interpreter::lexer::scan),
///   ending with `Eof`.
///
/// # Returns
/// The instructions that parsed, and every syntax error found.
///
/// # Example
/// ```
/// use geowalle::interpreter::{lexer::scan, parser::parse};
///
/// let (tokens, _) = scan("a = 1; b = ; c = 3;");
/// let (program, errors) = parse(&tokens);
///
/// assert_eq!(program.len(), 2);
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> (Vec<Statement>, Vec<ParseError>) {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();
    let mut errors = Vec::new();
    let mut imports_allowed = true;

    while let Some(kind) = peek_kind(&mut iter)
          && *kind != TokenKind::Eof
    {
        if *kind != TokenKind::Import {
            imports_allowed = false;
        }

        let instruction = parse_instruction(&mut iter, imports_allowed).and_then(|instruction| {
                                                                          expect(&mut iter,
                                                                                 &TokenKind::Semicolon,
                                                                                 "';'")?;
                                                                          Ok(instruction)
                                                                      });
        match instruction {
            Ok(instruction) => program.push(instruction),
            Err(e) => {
                trace!("recovering from syntax error: {e}");
                errors.push(e);
                synchronize(&mut iter);
            },
        }
    }

    (program, errors)
}

/// Skips tokens up to and including the next `;`, stopping early at `Eof`.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(kind) = peek_kind(tokens) {
        match kind {
            TokenKind::Eof => return,
            TokenKind::Semicolon => {
                tokens.next();
                return;
            },
            _ => {
                tokens.next();
            },
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the logical operators, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical(tokens)
}

/// Parses `if <condition> then <expr> else <expr>`.
///
/// Both branches are required.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Then, "'then'")?;
    let then_branch = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Else, "'else'")?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::Conditional { condition: Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch),
                           line })
}

/// Parses `let <instruction>; {<instruction>;} in <expr>`.
///
/// At least one instruction is required. Instructions inside a `let` can't
/// be imports.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `let` keyword.
/// - `line`: Line number of the `let` token.
pub fn parse_let<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut instructions = Vec::new();
    loop {
        instructions.push(parse_instruction(tokens, false)?);
        expect(tokens, &TokenKind::Semicolon, "';'")?;
        if peek_kind(tokens) == Some(&TokenKind::In) {
            tokens.next();
            break;
        }
    }

    let body = parse_expression(tokens)?;
    Ok(Expr::Let { instructions,
                   body: Box::new(body),
                   line })
}
