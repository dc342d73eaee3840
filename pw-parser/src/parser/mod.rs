//! Recursive-descent parser producing an [`Expr`](expr::Expr) tree with source spans.
//!
//! Every node type implements [`Parse`]. Parsing is speculative: a parse function that fails
//! leaves the [`Parser`] where it started, so the caller can try an alternative. Errors marked
//! fatal stop this search, since no alternative could succeed after them.

pub mod binary;
pub mod call;
pub mod error;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod token;
pub mod unary;

use error::{Error, kind::{self, ErrorKind}};
use super::tokenizer::{tokenize_complete, Token};
use std::{cmp::Ordering, ops::Range};

/// Returns from the enclosing function with the result of the given parse, unless the parse
/// failed with a non-fatal error. The non-fatal error is the value of the macro, and the caller
/// moves on to its next alternative.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($expr:expr $(,)?) => {
        match $expr {
            Ok(value) => return Ok(value),
            Err(err) if err.fatal => return Err(err),
            err => err,
        }
    };
}

/// Cursor over the tokens of one expression.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    tokens: Box<[Token<'source>]>,

    /// Index of the token that [`Parser::next_token`] returns next.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes the source and places the cursor before the first token.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates a non-fatal error at the cursor.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// The empty span just past the last token.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// The span of the token under the cursor, or [`Parser::eof_span`] when all tokens are
    /// consumed.
    pub fn span(&self) -> Range<usize> {
        match self.tokens.get(self.cursor) {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }

    /// Moves the cursor to where a lookahead copy of this parser stopped.
    pub fn set_cursor(&mut self, ahead: &Parser) {
        self.cursor = ahead.cursor;
    }

    /// The token under the cursor, whitespace included.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Consumes and returns the next non-whitespace token.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            if !token.is_whitespace() {
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Parses a `T`, restoring the cursor on failure.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Parses one or more comma-separated `T`s. Parsing stops at the first element that fails
    /// without a fatal error, after at least one element was parsed.
    pub fn try_parse_delimited<T: Parse>(&mut self) -> Result<Vec<T>, Error> {
        let mut values = vec![self.try_parse::<T>()?];

        while self.try_parse::<token::Comma>().is_ok() {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) if err.fatal => return Err(err),
                Err(_) => break,
            }
        }

        Ok(values)
    }

    /// Runs the parse function, restoring the cursor on failure.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        let result = f(self);
        if result.is_err() {
            self.cursor = start;
        }
        result
    }

    /// Parses a `T` that must also satisfy the predicate, restoring the cursor if either fails.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        self.try_parse_with_fn(|input| {
            let value = T::parse(input)?;
            predicate(&value, input)?;
            Ok(value)
        })
    }

    /// Parses a `T` that spans the whole source, apart from trailing whitespace.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;

        // point the error at the leftover token, not at the whitespace before it
        while self.current_token().map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }

        match self.current_token() {
            None => Ok(value),
            Some(_) => Err(self.error(kind::ExpectedEof)),
        }
    }
}

/// A syntax node that can be parsed from tokens.
pub trait Parse: Sized {
    /// Parses the node at the cursor, advancing past it on success.
    ///
    /// Implementations may leave the cursor anywhere on failure; use [`Parser::try_parse`] to
    /// backtrack.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Which side an operator groups with when it repeats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,

    /// `a ^ b ^ c` is `a ^ (b ^ c)`. Prefix operators are right-associative, since `--a` is
    /// `-(-a)`.
    Right,
}

/// Binding strength of operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Weaker than every operator; used to parse a complete expression.
    Any,

    /// `|`
    Or,

    /// `&`
    And,

    /// `==`, `!=`, `<`, `<=`, `>` and `>=`
    Compare,

    /// `+` and `-`
    Term,

    /// `*`, `/` and implicit multiplication
    Factor,

    /// Prefix `-` and `+`
    Neg,

    /// `^`
    Exp,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precedence {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}
