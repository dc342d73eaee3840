use crate::parser::{
    error::{kind, Error},
    expr::Expr,
    literal::LitSym,
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `if_func(x > 0, 1, 0)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    pub name: LitSym,

    /// May be empty, as in `pi()`.
    pub args: Vec<Expr>,

    /// From the name to the closing parenthesis.
    pub span: Range<usize>,

    /// From `(` to `)`, inclusive.
    pub paren_span: Range<usize>,
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open_paren = input.try_parse::<OpenParen>()?;

        // `name()` is a call with no arguments
        let args = if input.clone().try_parse::<CloseParen>().is_ok() {
            Vec::new()
        } else {
            input.try_parse_delimited::<Expr>()?
        };

        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new_fatal(vec![open_paren.span.clone()], kind::UnclosedParenthesis))?;

        Ok(Self {
            span: name.span.start..close_paren.span.end,
            name,
            args,
            paren_span: open_paren.span.start..close_paren.span.end,
        })
    }
}
