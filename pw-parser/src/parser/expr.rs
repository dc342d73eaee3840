use crate::{
    parser::{
        binary::Binary,
        call::Call,
        error::Error,
        literal::Literal,
        paren::Paren,
        unary::Unary,
        Parse,
        Parser,
        Precedence,
    },
    try_parse_catch_fatal,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression tree, as written in the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(x)`.
    Call(Call),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Ok(Binary::parse_expr(input, lhs, Precedence::Any)?.0)
    }
}

/// The operand of a prefix operator, or a factor of implicit multiplication.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    Literal(Literal),
    Paren(Paren),
    Call(Call),
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // a call starts with a name, so it must be tried before the symbol literal
        let _ = try_parse_catch_fatal!(input.try_parse().map(Primary::Call));
        let _ = try_parse_catch_fatal!(input.try_parse().map(Primary::Literal));
        input.try_parse().map(Primary::Paren)
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Expr::Literal(literal),
            Primary::Paren(paren) => Expr::Paren(paren),
            Primary::Call(call) => Expr::Call(call),
        }
    }
}
