use crate::{
    parser::{error::{kind, Error}, token::{Float, Int, Name}, Parse, Parser},
    try_parse_catch_fatal,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. Integers and decimals are both stored as [`f64`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    pub value: f64,

    /// Where the literal appears in the source.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = match input.try_parse::<Float>() {
            Ok(float) => (float.lexeme, float.span),
            Err(_) => {
                let int = input.try_parse::<Int>()?;
                (int.lexeme, int.span)
            },
        };

        let value = lexeme.parse::<f64>()
            .map_err(|_| Error::new(vec![span.clone()], kind::InvalidNumber))?;
        Ok(Self { value, span })
    }
}

/// A symbol / identifier literal, such as `x` or `point_x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    pub name: String,

    /// Where the literal appears in the source.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;
        Ok(Self { name: name.lexeme, span: name.span })
    }
}

/// Represents a literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal, such as `16` or `3.14`.
    Number(LitNum),

    /// A symbol literal, such as `x`.
    Symbol(LitSym),
}

impl Literal {
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse().map(Literal::Number));
        input.try_parse().map(Literal::Symbol)
    }
}
