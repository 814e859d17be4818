use std::{collections::HashSet, iter::Peekable};

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                end_of_input, expect, figure_kind, parse_identifier, peek_kind, peek_second_kind,
            },
        },
        value::{color::Color, figure::FigureKind},
    },
};

/// Parses a single instruction, without its terminating `;`.
///
/// An instruction may be one of:
/// - an import (`import "file"`), only while `imports_allowed` is set;
/// - a drawing instruction (`draw`, `print`, `color`, `restore`);
/// - a random declaration (`point p`, `circle sequence cs`);
/// - a single or multiple assignment;
/// - a function declaration (`f(x) = ...`);
/// - an expression used as an instruction.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the instruction.
/// - `imports_allowed`: Whether an `import` is legal here.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_instruction<'a, I>(tokens: &mut Peekable<I>, imports_allowed: bool) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.peek().copied().ok_or_else(end_of_input)?;
    let line = token.line;

    if let Some(kind) = figure_kind(&token.kind)
       && peek_second_kind(tokens) != Some(&TokenKind::LParen)
    {
        tokens.next();
        return parse_random_declaration(tokens, kind, line);
    }

    match &token.kind {
        TokenKind::Import if !imports_allowed => Err(ParseError::MisplacedImport { line }),
        TokenKind::Import => {
            tokens.next();
            let path = parse_string(tokens, "a file path")?;
            Ok(Statement::Import { path, line })
        },
        TokenKind::Draw => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            let label = parse_label(tokens);
            Ok(Statement::Draw { expr, label, line })
        },
        TokenKind::Print => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            let label = parse_label(tokens);
            Ok(Statement::Print { expr, label, line })
        },
        TokenKind::Color => {
            tokens.next();
            parse_color(tokens, line)
        },
        TokenKind::Restore => {
            tokens.next();
            Ok(Statement::Restore { line })
        },
        TokenKind::Identifier(_) if peek_second_kind(tokens) == Some(&TokenKind::Comma) => {
            parse_multiple_assignment(tokens, line)
        },
        TokenKind::Identifier(name) if peek_second_kind(tokens) == Some(&TokenKind::Equals) => {
            tokens.next();
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Statement::Assignment { name: name.clone(),
                                       value,
                                       line })
        },
        _ => {
            let expr = parse_expression(tokens)?;
            if peek_kind(tokens) == Some(&TokenKind::Equals)
               && let Expr::FunctionCall { name, arguments, line } = expr
            {
                tokens.next();
                return parse_function_declaration(tokens, name, &arguments, line);
            }
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses the rest of `point p` or `circle sequence cs` after the figure
/// keyword.
fn parse_random_declaration<'a, I>(tokens: &mut Peekable<I>,
                                   kind: FigureKind,
                                   line: usize)
                                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let is_sequence = peek_kind(tokens) == Some(&TokenKind::Sequence);
    if is_sequence {
        tokens.next();
    }
    let name = parse_identifier(tokens)?;
    Ok(Statement::RandomDeclaration { name,
                                      kind,
                                      is_sequence,
                                      line })
}

/// Parses a string literal and returns its contents.
fn parse_string<'a, I>(tokens: &mut Peekable<I>, expected: &str) -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().copied() {
        Some(Token { kind: TokenKind::Str(s),
                     .. }) => {
            tokens.next();
            Ok(s.clone())
        },
        Some(token) => Err(ParseError::Expected { expected: expected.to_string(),
                                                  found:    token.describe().to_string(),
                                                  line:     token.line, }),
        None => Err(end_of_input()),
    }
}

/// Consumes the optional string label after `draw` or `print`.
fn parse_label<'a, I>(tokens: &mut Peekable<I>) -> Option<String>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        Some(TokenKind::Str(label)) => {
            tokens.next();
            Some(label.clone())
        },
        _ => None,
    }
}

/// Parses the color name after `color`, written as an identifier or a
/// string.
fn parse_color<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek().copied().ok_or_else(end_of_input)?;
    let name = match &token.kind {
        TokenKind::Identifier(name) | TokenKind::Str(name) => name,
        _ => {
            return Err(ParseError::Expected { expected: "a color".to_string(),
                                              found:    token.describe().to_string(),
                                              line:     token.line, });
        },
    };
    tokens.next();

    let color = Color::from_name(name).ok_or_else(|| ParseError::InvalidColor { name: name.clone(),
                                                                                 line })?;
    Ok(Statement::Color { color, line })
}

/// Parses `a, b, c = expression`.
fn parse_multiple_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut names = vec![parse_identifier(tokens)?];
    while peek_kind(tokens) == Some(&TokenKind::Comma) {
        tokens.next();
        names.push(parse_identifier(tokens)?);
    }
    expect(tokens, &TokenKind::Equals, "'='")?;

    let value = parse_expression(tokens)?;
    Ok(Statement::MultipleAssignment { names, value, line })
}

/// Turns a call that turned out to be followed by `=` into a function
/// declaration and parses its body.
///
/// # Errors
/// - `InvalidParameter` if an argument is not a bare identifier.
/// - `DuplicateParameter` if a name repeats.
/// - `NestedFunctionDeclaration` if the body declares another function.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     name: String,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut params = Vec::with_capacity(arguments.len());
    let mut seen = HashSet::new();
    for argument in arguments {
        let Expr::Constant { name: param, .. } = argument else {
            return Err(ParseError::InvalidParameter { function: name,
                                                      line });
        };
        if !seen.insert(param.as_str()) {
            return Err(ParseError::DuplicateParameter { function:  name,
                                                        parameter: param.clone(),
                                                        line });
        }
        params.push(param.clone());
    }

    let body = parse_expression(tokens)?;

    if let Some(inner) = nested_declaration(&body) {
        return Err(ParseError::NestedFunctionDeclaration { function: inner.name.clone(),
                                                           line:     inner.line, });
    }
    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body,
                                         line }))
}

/// Finds a function declared anywhere inside `expr`.
fn nested_declaration(expr: &Expr) -> Option<&FunctionDef> {
    match expr {
        Expr::Let { instructions, body, .. } => {
            instructions.iter()
                        .find_map(|instruction| match instruction {
                            Statement::Function(def) => Some(def),
                            other => statement_expressions(other).find_map(nested_declaration),
                        })
                        .or_else(|| nested_declaration(body))
        },
        Expr::Grouping { inner, .. } => nested_declaration(inner),
        Expr::UnaryOp { expr, .. } => nested_declaration(expr),
        Expr::BinaryOp { left, right, .. } => {
            nested_declaration(left).or_else(|| nested_declaration(right))
        },
        Expr::Conditional { condition,
                            then_branch,
                            else_branch,
                            .. } => nested_declaration(condition).or_else(|| nested_declaration(then_branch))
                                                                 .or_else(|| nested_declaration(else_branch)),
        Expr::FunctionCall { arguments, .. }
        | Expr::FigureDeclaration { arguments, .. }
        | Expr::SequenceLiteral { elements: arguments,
                                  .. } => arguments.iter().find_map(nested_declaration),
        Expr::Literal { .. }
        | Expr::Undefined { .. }
        | Expr::Constant { .. }
        | Expr::InfiniteSequence { .. }
        | Expr::RangeSequence { .. } => None,
    }
}

/// The expressions an instruction evaluates.
fn statement_expressions(statement: &Statement) -> impl Iterator<Item = &Expr> {
    let expr = match statement {
        Statement::Expression { expr, .. }
        | Statement::Draw { expr, .. }
        | Statement::Print { expr, .. }
        | Statement::Assignment { value: expr, .. }
        | Statement::MultipleAssignment { value: expr, .. } => Some(expr),
        Statement::Function(def) => Some(&def.body),
        Statement::Import { .. }
        | Statement::Color { .. }
        | Statement::Restore { .. }
        | Statement::RandomDeclaration { .. } => None,
    };
    expr.into_iter()
}
