use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, peek_kind},
        },
        value::core::format_number,
    },
    util::num::{MAX_SAFE_INT, is_safe_count},
};

/// Parses a sequence literal between braces.
///
/// Three forms are accepted:
/// - `{a, b, c}`: a finite list; `{}` is empty.
/// - `{start...}`: the infinite sequence `start, start + 1, ...`.
/// - `{start...end}`: the inclusive range from `start` to `end`.
///
/// Grammar:
/// ```text
///     sequence := "{" "}"
///               | "{" expression ("," expression)* "}"
///               | "{" number "..." number? "}"
/// ```
///
/// # Errors
/// Returns `ParseError::InvalidSequenceBound` if a range or infinite bound is
/// not a non-negative whole number literal.
pub fn parse_sequence_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::LBrace, "'{'")?.line;

    if peek_kind(tokens) == Some(&TokenKind::RBrace) {
        tokens.next();
        return Ok(Expr::SequenceLiteral { elements: Vec::new(),
                                          line });
    }

    let first = parse_expression(tokens)?;

    if peek_kind(tokens) != Some(&TokenKind::Ellipsis) {
        let mut elements = vec![first];
        if peek_kind(tokens) == Some(&TokenKind::Comma) {
            tokens.next();
            elements.extend(parse_comma_separated(tokens,
                                                  parse_expression,
                                                  &TokenKind::RBrace,
                                                  "'}'")?);
        } else {
            expect(tokens, &TokenKind::RBrace, "',' or '}'")?;
        }
        return Ok(Expr::SequenceLiteral { elements, line });
    }

    tokens.next();
    let start = sequence_bound(&first)?;

    if peek_kind(tokens) == Some(&TokenKind::RBrace) {
        tokens.next();
        return Ok(Expr::InfiniteSequence { start, line });
    }

    let end = sequence_bound(&parse_expression(tokens)?)?;
    expect(tokens, &TokenKind::RBrace, "'}'")?;
    Ok(Expr::RangeSequence { start, end, line })
}

/// Reads a range bound, which must be a literal non-negative whole number.
///
/// Bounds stay below `MAX_SAFE_INT` so that the element count of any range
/// is itself a safe count.
fn sequence_bound(expr: &Expr) -> ParseResult<f64> {
    if let Expr::Literal { value: LiteralValue::Number(n),
                           .. } = expr
       && is_safe_count(*n)
       && *n < MAX_SAFE_INT
    {
        return Ok(*n);
    }

    Err(ParseError::InvalidSequenceBound { bound: describe_bound(expr),
                                           line:  expr.line_number(), })
}

fn describe_bound(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value: LiteralValue::Number(n),
                        .. } => format_number(*n),
        Expr::UnaryOp { op: UnaryOperator::Negate,
                        expr,
                        .. } => format!("-{}", describe_bound(expr)),
        Expr::Literal { value: LiteralValue::Str(s),
                        .. } => format!("\"{s}\""),
        Expr::Constant { name, .. } => name.clone(),
        _ => "expression".to_string(),
    }
}
