use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        value::figure::FigureKind,
    },
};

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> Option<&'a TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().map(|token| &token.kind)
}

/// Returns the kind of the token after the next one.
pub(in crate::interpreter::parser) fn peek_second_kind<'a, I>(tokens: &Peekable<I>) -> Option<&'a TokenKind>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    lookahead.next().map(|token| &token.kind)
}

/// Error for a token that can't start or continue the construct being
/// parsed.
pub(in crate::interpreter::parser) fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken { token: token.describe().to_string(),
                                  line:  token.line, }
}

/// Error for running out of tokens. Only reachable if a caller consumed the
/// final `Eof` token.
pub(in crate::interpreter::parser) fn end_of_input() -> ParseError {
    ParseError::UnexpectedToken { token: "end of input".to_string(),
                                  line:  0, }
}

/// Consumes the next token if it has the given kind.
///
/// On a mismatch nothing is consumed, so error recovery still sees the
/// offending token.
///
/// # Errors
/// Returns `ParseError::Expected` naming `expected` and the token found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().copied() {
        Some(token) if token.kind == *kind => {
            tokens.next();
            Ok(token)
        },
        Some(token) => Err(ParseError::Expected { expected: expected.to_string(),
                                                  found:    token.describe().to_string(),
                                                  line:     token.line, }),
        None => Err(end_of_input()),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `ParseError::Expected` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().copied() {
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => {
            tokens.next();
            Ok(name.clone())
        },
        Some(token) => Err(ParseError::Expected { expected: "an identifier".to_string(),
                                                  found:    token.describe().to_string(),
                                                  line:     token.line, }),
        None => Err(end_of_input()),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call arguments, figure constructors and
/// sequence literals. An immediately encountered closing token produces an
/// empty list. The closing token is consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `closing_text`: How the closing token is named in error messages.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than
/// `,` or the closing one follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind,
    closing_text: &str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if peek_kind(tokens) == Some(closing) {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek().copied() {
            Some(Token { kind: TokenKind::Comma,
                         .. }) => {
                tokens.next();
            },
            Some(token) if token.kind == *closing => {
                tokens.next();
                break;
            },
            Some(token) => {
                return Err(ParseError::Expected { expected: format!("',' or {closing_text}"),
                                                  found:    token.describe().to_string(),
                                                  line:     token.line, });
            },
            None => return Err(end_of_input()),
        }
    }
    Ok(items)
}

/// Maps a figure keyword to the figure it names.
pub(in crate::interpreter::parser) const fn figure_kind(kind: &TokenKind) -> Option<FigureKind> {
    match kind {
        TokenKind::Point => Some(FigureKind::Point),
        TokenKind::Line => Some(FigureKind::Line),
        TokenKind::Segment => Some(FigureKind::Segment),
        TokenKind::Ray => Some(FigureKind::Ray),
        TokenKind::Circle => Some(FigureKind::Circle),
        TokenKind::Arc => Some(FigureKind::Arc),
        TokenKind::Measure => Some(FigureKind::Measure),
        _ => None,
    }
}
