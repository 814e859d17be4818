use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression, parse_if, parse_let},
            sequence::parse_sequence_literal,
            utils::{end_of_input, expect, figure_kind, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = match tokens.peek().map(|token| &token.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Bang) => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };
    let line = tokens.next().map_or(0, |token| token.line);
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "undefined"
///              | identifier ( "(" arguments ")" )?
///              | figure_keyword "(" arguments ")"
///              | "(" expression ")"
///              | "{" sequence "}"
///              | if_expression
///              | let_expression
/// ```
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the next token can't start an
/// expression. The token is not consumed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.peek().copied().ok_or_else(end_of_input)?;
    let line = token.line;

    match &token.kind {
        TokenKind::Number(_) | TokenKind::Str(_) | TokenKind::Bool(_) => {
            tokens.next();
            let value = token.literal().ok_or_else(|| unexpected(token))?;
            Ok(Expr::Literal { value, line })
        },
        TokenKind::Undefined => {
            tokens.next();
            Ok(Expr::Undefined { line })
        },
        TokenKind::LParen => parse_grouping(tokens),
        TokenKind::LBrace => parse_sequence_literal(tokens),
        TokenKind::If => {
            tokens.next();
            parse_if(tokens, line)
        },
        TokenKind::Let => {
            tokens.next();
            parse_let(tokens, line)
        },
        TokenKind::Identifier(name) => {
            tokens.next();
            parse_identifier_or_call(tokens, name, line)
        },
        kind => match figure_kind(kind) {
            Some(kind) => {
                tokens.next();
                expect(tokens, &TokenKind::LParen, "'('")?;
                let arguments =
                    parse_comma_separated(tokens, parse_expression, &TokenKind::RParen, "')'")?;
                Ok(Expr::FigureDeclaration { kind,
                                             arguments,
                                             line })
            },
            None => Err(unexpected(token)),
        },
    }
}

/// Parses `( expression )`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, &TokenKind::LParen, "'('")?;
    let inner = parse_expression(tokens)?;
    expect(tokens, &TokenKind::RParen, "')'")?;
    Ok(Expr::Grouping { inner: Box::new(inner),
                        line:  open.line, })
}

/// Parses what follows an identifier: a call when `(` comes next, a
/// constant reference otherwise.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, name: &str, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if tokens.peek().is_some_and(|token| token.kind == TokenKind::LParen) {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &TokenKind::RParen, "')'")?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments,
                                       line });
    }

    Ok(Expr::Constant { name: name.to_string(),
                        line })
}
