use ariadne::Fmt;
use pw_attrs::ErrorKind;
use pw_error::EXPR;
use crate::tokenizer::TokenKind;

pub use pw_error::ErrorKind;

/// The input ended in the middle of an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("the input ends here, but an {} was expected", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// Tokens remain after a complete expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = ["the expression should have ended before this"],
    help = format!("only one {} can be rendered at a time", "expression".fg(EXPR)),
)]
pub struct ExpectedEof;

/// A token of the wrong kind.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("found {:?}", found)],
    help = format!(
        "expected one of: {}",
        expected.iter().map(|kind| format!("{:?}", kind)).collect::<Vec<_>>().join(", "),
    ),
)]
pub struct UnexpectedToken {
    /// The kinds that would have been accepted.
    pub expected: &'static [TokenKind],

    /// The kind of the offending token.
    pub found: TokenKind,
}

/// A numeric literal that does not fit in a double.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number literal",
    labels = ["this number"],
)]
pub struct InvalidNumber;

/// A `(` without a matching `)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["unmatched parenthesis"],
    help = "add a `)` after the grouped expression",
)]
pub struct UnclosedParenthesis;

/// `()` outside of a call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = ["there is nothing to group here"],
)]
pub struct EmptyParenthesis;

/// Rejects a speculative parse. Never shown to the user.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "speculative parse rejected",
    labels = [""],
)]
pub struct NonFatal;
