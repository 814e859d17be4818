use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Maps an operator token to the binary operator it denotes.
const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    Some(match kind {
             TokenKind::Plus => BinaryOperator::Add,
             TokenKind::Minus => BinaryOperator::Sub,
             TokenKind::Star => BinaryOperator::Mul,
             TokenKind::Slash => BinaryOperator::Div,
             TokenKind::Percent => BinaryOperator::Mod,
             TokenKind::Caret => BinaryOperator::Pow,
             TokenKind::Less => BinaryOperator::Less,
             TokenKind::Greater => BinaryOperator::Greater,
             TokenKind::LessEqual => BinaryOperator::LessEqual,
             TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
             TokenKind::EqualEqual => BinaryOperator::Equal,
             TokenKind::BangEqual => BinaryOperator::NotEqual,
             TokenKind::Ampersand => BinaryOperator::And,
             TokenKind::Pipe => BinaryOperator::Or,
             _ => return None,
         })
}

/// Parses one left-associative precedence level.
///
/// `level := operand (op operand)*` where `op` is one of `operators`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[BinaryOperator],
                                 operand: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = operand(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && operators.contains(&op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }
    Ok(left)
}

/// Parses `&` and `|`, the loosest binding operators.
///
/// The rule is: `logical := equality (("&" | "|") equality)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::And, BinaryOperator::Or],
                           parse_equality)
}

/// Parses `==` and `!=`.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_comparison)
}

/// Parses `<`, `>`, `<=` and `>=`.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Less,
                             BinaryOperator::Greater,
                             BinaryOperator::LessEqual,
                             BinaryOperator::GreaterEqual],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication-level expressions: `*`, `/` and `%`.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                           parse_power)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`. Unary operators bind tighter, so `-2 ^ 2` is `(-2) ^ 2`.
///
/// The rule is: `power := unary ("^" power)?`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_unary(tokens)?;
    if let Some(token) = tokens.peek().copied()
       && token.kind == TokenKind::Caret
    {
        tokens.next();
        let exponent = parse_power(tokens)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   line:  token.line, });
    }
    Ok(base)
}
