use crate::parser::{
    binary::Binary,
    error::Error,
    expr::{Expr, Primary},
    token::op::UnaryOp,
    Parse,
    Parser,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary operators are always prefix operators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// Where the unary expression appears in the source.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or if there is no unary operator, a primary expression.
    ///
    /// The operand of a unary operator binds everything with higher precedence than the
    /// operator itself, so `-x^2` is parsed as `-(x^2)`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        match input.try_parse::<Self>() {
            Ok(unary) => return Ok(Expr::Unary(unary)),
            Err(err) if err.fatal => return Err(err),
            Err(_) => (),
        }

        input.try_parse::<Primary>().map(Into::into)
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let operand = Self::parse_or_lower(input)?;
        let (operand, _) = Binary::parse_expr(input, operand, op.precedence())?;

        Ok(Self {
            span: op.span.start..operand.span().end,
            operand: Box::new(operand),
            op,
        })
    }
}
