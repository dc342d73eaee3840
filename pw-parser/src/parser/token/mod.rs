//! Single-token syntax nodes, used by the parser to request a specific token kind as a type.

pub mod op;

use crate::{
    parser::{error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Declares a node type for each listed [`TokenKind`], which parses exactly one token of that
/// kind and keeps its text.
macro_rules! single_tokens {
    ($($kind:ident),+ $(,)?) => {$(
        #[derive(Clone, Debug, PartialEq)]
        pub(crate) struct $kind {
            pub(crate) lexeme: String,
            pub(crate) span: Range<usize>,
        }

        impl Parse for $kind {
            fn parse(input: &mut Parser) -> Result<Self, Error> {
                let token = input.next_token()?;
                match token.kind {
                    TokenKind::$kind => Ok(Self { lexeme: token.lexeme.to_owned(), span: token.span }),
                    found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                        expected: &[TokenKind::$kind],
                        found,
                    })),
                }
            }
        }
    )+};
}

single_tokens!(Name, Comma, OpenParen, CloseParen, Int, Float);
