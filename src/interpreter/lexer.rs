use log::trace;
use logos::Logos;

use crate::{ast::LiteralValue, error::ParseError};

/// Failure reasons produced by the generated lexer.
///
/// The default variant is what `logos` emits for input no pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexicalError {
    /// No token starts at this character.
    #[default]
    UnexpectedCharacter,
    /// Digits run straight into letters, as in `12abc`.
    InvalidNumber,
    /// A string literal has no closing quote.
    UnfinishedString,
}

impl LexicalError {
    fn into_parse_error(self, lexeme: String, line: usize) -> ParseError {
        match self {
            Self::UnexpectedCharacter => ParseError::UnexpectedCharacter { lexeme, line },
            Self::InvalidNumber => ParseError::InvalidNumber { lexeme, line },
            Self::UnfinishedString => ParseError::UnfinishedString { line },
        }
    }
}

/// The kind of a lexical token, together with its literal value if it has
/// one.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalError)]
pub enum TokenKind {
    /// Numeric literals such as `3` or `2.5`, and the constants `PI` and `E`.
    #[regex(r"[0-9]+", lex_number)]
    #[token("PI", |_| std::f64::consts::PI)]
    #[token("E", |_| std::f64::consts::E, priority = 3)]
    Number(f64),
    /// String literals such as `"label"`. The quotes are not kept.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// A string literal cut off by the end of input. Never produced as a
    /// token.
    #[regex(r#""[^"]*"#, unfinished_string)]
    UnfinishedString,
    /// `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Identifiers such as `p1` or `_`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `import`
    #[token("import")]
    Import,
    /// `draw`
    #[token("draw")]
    Draw,
    /// `print`
    #[token("print")]
    Print,
    /// `color`
    #[token("color")]
    Color,
    /// `restore`
    #[token("restore")]
    Restore,
    /// `point`
    #[token("point")]
    Point,
    /// `line`
    #[token("line")]
    Line,
    /// `segment`
    #[token("segment")]
    Segment,
    /// `ray`
    #[token("ray")]
    Ray,
    /// `circle`
    #[token("circle")]
    Circle,
    /// `arc`
    #[token("arc")]
    Arc,
    /// `measure`
    #[token("measure")]
    Measure,
    /// `undefined`
    #[token("undefined")]
    Undefined,
    /// `sequence`
    #[token("sequence")]
    Sequence,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `=`
    #[token("=")]
    Equals,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `...`
    #[token("...")]
    Ellipsis,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks, counted in the extras.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Other whitespace.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// Appended after the last real token.
    Eof,
}

/// Per-run lexer state.
#[derive(Default)]
pub struct LexerExtras {
    /// The line the lexer is currently on, starting at 1.
    pub line: usize,
}

/// Extends a run of digits by hand so that `1...5` stays `1`, `...`, `5`
/// while `2.5` is one number and `12abc` is one error.
fn lex_number(lex: &mut logos::Lexer<TokenKind>) -> Result<f64, LexicalError> {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let fraction = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + fraction);
    }

    let trailing = lex.remainder()
                      .bytes()
                      .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
                      .count();
    if trailing > 0 {
        lex.bump(trailing);
        return Err(LexicalError::InvalidNumber);
    }

    lex.slice().parse().map_err(|_| LexicalError::InvalidNumber)
}

fn parse_string(lex: &mut logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice[1..slice.len() - 1].to_string()
}

fn unfinished_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexicalError> {
    lex.extras.line += lex.slice().matches('\n').count();
    Err(LexicalError::UnfinishedString)
}

/// A token produced by [`scan`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// The line the token starts on.
    pub line:   usize,
}

impl Token {
    /// Returns the literal carried by the token, if any.
    #[must_use]
    pub fn literal(&self) -> Option<LiteralValue> {
        match &self.kind {
            TokenKind::Number(n) => Some(LiteralValue::Number(*n)),
            TokenKind::Str(s) => Some(LiteralValue::Str(s.clone())),
            TokenKind::Bool(b) => Some(LiteralValue::Bool(*b)),
            _ => None,
        }
    }

    /// Describes the token for error messages.
    #[must_use]
    pub fn describe(&self) -> &str {
        if self.kind == TokenKind::Eof { "end of input" } else { &self.lexeme }
    }
}

/// Turns source text into tokens.
///
/// Scanning never stops at the first problem: every lexical error is
/// collected and the lexer resumes after the offending text. The returned
/// token list always ends with a [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use geowalle::interpreter::lexer::{TokenKind, scan};
///
/// let (tokens, errors) = scan("draw point(1, 2) \"A\";");
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0].kind, TokenKind::Draw);
/// assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
///
/// let (_, errors) = scan("x = 12abc; y = \"open");
/// assert_eq!(errors.len(), 2);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let lexeme = lexer.slice().to_string();
        let line = lexer.extras.line - lexeme.matches('\n').count();
        match result {
            Ok(kind) => tokens.push(Token { kind, lexeme, line }),
            Err(error) => errors.push(error.into_parse_error(lexeme, line)),
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        lexeme: String::new(),
                        line:   lexer.extras.line, });
    trace!("scanned {} tokens with {} lexical errors", tokens.len(), errors.len());

    (tokens, errors)
}
