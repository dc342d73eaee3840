//! Implementation of the rewrite rules.
//!
//! Each rule in this module is a function that takes the expression to rewrite as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies, or `None` if the
//! rule does not apply.

pub mod arithmetic;
pub mod conditional;
pub mod general;
pub mod logic;
pub mod point;
pub mod power;
pub mod sign;

use crate::{node::Node, step_collector::StepCollector};
use pw_parser::parser::token::op::{BinOpKind, UnaryOpKind};
use super::step::Step;

/// If the expression is a function call with the given function name and exactly `arity`
/// arguments, calls the given transformation function with the arguments.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_call(
    expr: &Node,
    name: &str,
    arity: usize,
    f: impl Fn(&[Node]) -> Option<Node>,
) -> Option<Node> {
    match expr.as_call(name) {
        Some(args) if args.len() == arity => f(args),
        _ => None,
    }
}

/// If the expression is a binary operation of the given kind, calls the given transformation
/// function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Node,
    kind: BinOpKind,
    f: impl Fn(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    match expr {
        Node::Binary(op, lhs, rhs) if *op == kind => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is a unary operation of the given kind, calls the given transformation
/// function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_unary(
    expr: &Node,
    kind: UnaryOpKind,
    f: impl Fn(&Node) -> Option<Node>,
) -> Option<Node> {
    match expr {
        Node::Unary(op, operand) if *op == kind => f(operand),
        _ => None,
    }
}

/// Applies all rules, in priority order.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    logic::all(expr, step_collector)
        .or_else(|| arithmetic::all(expr, step_collector))
        .or_else(|| conditional::all(expr, step_collector))
        .or_else(|| point::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| sign::all(expr, step_collector))
        .or_else(|| general::all(expr, step_collector))
}
