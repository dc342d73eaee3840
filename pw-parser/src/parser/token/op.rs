//! Operator tokens and their binding rules.

use crate::{
    parser::{error::{kind, Error}, Associativity, Parse, Parser, Precedence},
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declares an operator kind enum from a table of `Variant = Token => "symbol", precedence,
/// associativity` rows, along with its lookup functions.
macro_rules! operators {
    (
        $(#[$attr:meta])*
        $name:ident {
            $($variant:ident = $token:ident => $symbol:literal, $prec:ident, $assoc:ident;)+
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                #[doc = concat!("`", $symbol, "`")]
                $variant,
            )+
        }

        impl $name {
            /// The token kinds that spell an operator of this kind.
            const TOKENS: &'static [TokenKind] = &[$(TokenKind::$token),+];

            /// Returns the operator spelled by the given token kind.
            fn from_token(token: TokenKind) -> Option<Self> {
                match token {
                    $(TokenKind::$token => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns how tightly the operator binds its operands.
            pub fn precedence(&self) -> Precedence {
                match self {
                    $(Self::$variant => Precedence::$prec,)+
                }
            }

            /// Returns how repeated uses of the operator group.
            pub fn associativity(&self) -> Associativity {
                match self {
                    $(Self::$variant => Associativity::$assoc,)+
                }
            }

            /// Returns the source text of the operator.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }
        }
    };
}

operators! {
    /// A prefix operator.
    UnaryOpKind {
        Neg = Sub => "-", Neg, Right;
        Plus = Add => "+", Neg, Right;
    }
}

operators! {
    /// An infix operator.
    BinOpKind {
        Exp = Exp => "^", Exp, Right;
        Mul = Mul => "*", Factor, Left;
        Div = Div => "/", Factor, Left;
        Add = Add => "+", Term, Left;
        Sub = Sub => "-", Term, Left;
        Greater = Greater => ">", Compare, Left;
        GreaterEq = GreaterEq => ">=", Compare, Left;
        Less = Less => "<", Compare, Left;
        LessEq = LessEq => "<=", Compare, Left;
        Eq = Eq => "==", Compare, Left;
        NotEq = NotEq => "!=", Compare, Left;
        And = And => "&", And, Left;
        Or = Or => "|", Or, Left;
    }
}

impl BinOpKind {
    /// Returns true for `==`, `!=`, `<`, `<=`, `>` and `>=`.
    pub fn is_comparison(&self) -> bool {
        self.precedence() == Precedence::Compare
    }

    /// Returns true for `&` and `|`.
    pub fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Returns true for `+` and `-`.
    pub fn is_additive(&self) -> bool {
        self.precedence() == Precedence::Term
    }
}

/// A prefix operator in the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    pub kind: UnaryOpKind,
    pub span: Range<usize>,
}

impl UnaryOp {
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match UnaryOpKind::from_token(token.kind) {
            Some(kind) => Ok(Self { kind, span: token.span }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: UnaryOpKind::TOKENS,
                found: token.kind,
            })),
        }
    }
}

/// An infix operator in the source, or one inserted by the parser for implicit multiplication.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    pub kind: BinOpKind,

    /// Whether the operator was inserted by the parser. An implicit operator spans the gap
    /// between its operands.
    pub implicit: bool,

    pub span: Range<usize>,
}

impl BinOp {
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match BinOpKind::from_token(token.kind) {
            Some(kind) => Ok(Self { kind, implicit: false, span: token.span }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: BinOpKind::TOKENS,
                found: token.kind,
            })),
        }
    }
}
