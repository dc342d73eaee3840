//! The rewrite engine, which brings an expression into the normal form used for rendering.
//!
//! Each rule is a function that accepts a [`Node`] and returns `Some(node)` if the rule applies.
//! Rules are tried in a fixed priority order, and the first rule that applies wins. Children are
//! normalized before their parent, and the engine keeps rewriting until no rule applies anywhere
//! in the tree. Every rule either removes nodes, replaces an expression with a literal, or
//! removes a level of nesting, so this always terminates.
//!
//! ```
//! use pw_simplify::{normalize, parse};
//!
//! let node = normalize(&parse("pow(pow(x, 2), 3)").unwrap());
//! assert_eq!(node.to_string(), "pow(x, 6)");
//! ```

pub mod rules;
pub mod step;

use crate::{node::Node, step_collector::StepCollector};
use step::Step;

/// Normalizes the children of the given expression.
fn normalize_children(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match expr {
        Node::Constant(_) | Node::Symbol(_) => expr.clone(),
        Node::Unary(op, operand) => Node::unary(*op, inner_normalize(operand, step_collector)),
        Node::Binary(op, lhs, rhs) => Node::binary(
            *op,
            inner_normalize(lhs, step_collector),
            inner_normalize(rhs, step_collector),
        ),
        Node::Call(name, args) => Node::Call(
            name.clone(),
            args.iter().map(|arg| inner_normalize(arg, step_collector)).collect(),
        ),
    }
}

/// Normalizes the expression bottom-up, until no rule applies to it or any of its children.
fn inner_normalize(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let mut expr = normalize_children(expr, step_collector);

    // a rewrite can expose new opportunities in the children it builds (e.g. `b*c` created by
    // `pow(pow(a, b), c)`), so those are normalized again before trying the rules at this node
    while let Some(rewritten) = rules::all(&expr, step_collector) {
        expr = normalize_children(&rewritten, step_collector);
    }

    expr
}

/// Normalizes the given expression using the default rule set.
pub fn normalize(expr: &Node) -> Node {
    inner_normalize(expr, &mut ())
}

/// Normalizes the given expression, reporting every applied rule to the given step collector.
pub fn normalize_with(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    inner_normalize(expr, step_collector)
}

/// Normalizes the given expression, returning the normalized expression and the rules that were
/// applied, in order.
pub fn normalize_with_steps(expr: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let normalized = inner_normalize(expr, &mut steps);
    (normalized, steps)
}
