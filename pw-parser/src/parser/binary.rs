//! Operator-precedence parsing of infix operators and implicit multiplication.

use crate::parser::{
    error::{kind, Error},
    expr::{Expr, Primary},
    token::op::{BinOp, BinOpKind},
    unary::Unary,
    Associativity,
    Parser,
    Precedence,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operator joining two operands while the right operand is still being extended.
#[derive(Debug, Clone, PartialEq)]
enum Joiner {
    Explicit(BinOp),

    /// Two adjacent factors, as in `2x` or `3(x + 1)`.
    Adjacent,
}

impl Joiner {
    fn precedence(&self) -> Precedence {
        match self {
            Joiner::Explicit(op) => op.precedence(),
            Joiner::Adjacent => Precedence::Factor,
        }
    }

    /// Builds the operator node. An implicit multiplication spans the gap between its operands.
    fn into_op(self, lhs: &Expr, rhs: &Expr) -> BinOp {
        match self {
            Joiner::Explicit(op) => op,
            Joiner::Adjacent => BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: lhs.span().end..rhs.span().start,
            },
        }
    }
}

/// `lhs op rhs`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    pub lhs: Box<Expr>,
    pub op: BinOp,
    pub rhs: Box<Expr>,

    /// From the start of `lhs` to the end of `rhs`.
    pub span: Range<usize>,
}

impl Binary {
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Extends `rhs` with every following operator that binds tighter than `joiner`, then joins
    /// `lhs` and `rhs`.
    ///
    /// For `1 + 2 * 3`, `rhs` starts as `2` and grows to `2 * 3`, since `*` binds tighter than
    /// `+`. For `1 * 2 + 3`, `rhs` stays `2`, and the caller continues from `1 * 2` with `+ 3`.
    /// Under an operator weaker than multiplication, a factor right after `rhs` multiplies into
    /// it, as in `1 + 2x`.
    fn complete_rhs(
        input: &mut Parser,
        lhs: Expr,
        joiner: Joiner,
        mut rhs: Expr,
    ) -> Result<Expr, Error> {
        let outer = joiner.precedence();

        loop {
            // peek at the next operator without consuming it
            let next = input.clone().try_parse::<BinOp>();
            match next {
                Ok(next) => {
                    let inner = next.precedence();
                    let tighter = inner > outer
                        || (inner == outer && next.associativity() == Associativity::Right);
                    if !tighter {
                        break;
                    }
                    rhs = Self::parse_expr(input, rhs, inner)?.0;
                },
                Err(_) if outer >= Precedence::Factor => break,
                Err(_) => {
                    let (extended, changed) = Self::parse_expr(input, rhs, Precedence::Factor)?;
                    rhs = extended;
                    if !changed {
                        break;
                    }
                },
            }
        }

        let op = joiner.into_op(&lhs, &rhs);
        Ok(Expr::Binary(Binary {
            span: lhs.span().start..rhs.span().end,
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }))
    }

    /// Folds every following operator with at least the given precedence into `lhs`, left to
    /// right.
    ///
    /// Returns the resulting expression, and whether any operator was folded.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<(Expr, bool), Error> {
        let mut changed = false;

        loop {
            let mut ahead = input.clone();
            let op = ahead.try_parse_then::<BinOp, _>(|op, input| {
                if op.precedence() >= precedence {
                    Ok(())
                } else {
                    Err(input.error(kind::NonFatal))
                }
            });

            if let Ok(op) = op {
                input.set_cursor(&ahead);
                let rhs = Unary::parse_or_lower(input)?;
                lhs = Self::complete_rhs(input, lhs, Joiner::Explicit(op), rhs)?;
            } else if precedence <= Precedence::Factor {
                // a weaker operator follows; it is not an implicit product
                if ahead.try_parse::<BinOp>().is_ok() {
                    break;
                }

                let factor = match ahead.try_parse::<Primary>() {
                    Ok(factor) => factor,
                    Err(err) if err.fatal => return Err(err),
                    Err(_) => break,
                };

                input.set_cursor(&ahead);
                lhs = Self::complete_rhs(input, lhs, Joiner::Adjacent, factor.into())?;
            } else {
                break;
            }

            changed = true;
        }

        Ok((lhs, changed))
    }
}
