//! Identities of the logical operators. Logical values are the numbers `0` and `1`, so these
//! behave like arithmetic on them.

use crate::node::Node;
use crate::simplify::{rules::do_binary, step::Step};
use crate::step_collector::StepCollector;
use pw_parser::parser::token::op::BinOpKind;

/// `a|1 = 1`
/// `1|a = 1`
pub fn or_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Or, |lhs, rhs| {
        if lhs.is_number(1.0) || rhs.is_number(1.0) {
            Some(Node::Constant(1.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::OrOne);
    Some(opt)
}

/// `a|0 = a`
/// `0|a = a`
pub fn or_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Or, |lhs, rhs| {
        if rhs.is_number(0.0) {
            Some(lhs.clone())
        } else if lhs.is_number(0.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::OrZero);
    Some(opt)
}

/// `a&1 = a`
/// `1&a = a`
pub fn and_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::And, |lhs, rhs| {
        if rhs.is_number(1.0) {
            Some(lhs.clone())
        } else if lhs.is_number(1.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AndOne);
    Some(opt)
}

/// `a&0 = 0`
/// `0&a = 0`
pub fn and_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::And, |lhs, rhs| {
        if lhs.is_number(0.0) || rhs.is_number(0.0) {
            Some(Node::Constant(0.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::AndZero);
    Some(opt)
}

/// Applies all logical rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    or_one(expr, step_collector)
        .or_else(|| or_zero(expr, step_collector))
        .or_else(|| and_one(expr, step_collector))
        .or_else(|| and_zero(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parse;
    use super::*;

    fn apply(input: &str) -> (Option<String>, Vec<Step>) {
        let mut steps = Vec::new();
        let out = all(&parse(input).unwrap(), &mut steps).map(|node| node.to_string());
        (out, steps)
    }

    #[test]
    fn or_with_one_is_one() {
        assert_eq!(apply("(x+y)|1"), (Some("1".to_string()), vec![Step::OrOne]));
        assert_eq!(apply("1|f(x)"), (Some("1".to_string()), vec![Step::OrOne]));
    }

    #[test]
    fn or_with_zero_is_other_side() {
        assert_eq!(apply("0|a>b"), (Some("a>b".to_string()), vec![Step::OrZero]));
    }

    #[test]
    fn and_identities() {
        assert_eq!(apply("x&1"), (Some("x".to_string()), vec![Step::AndOne]));
        assert_eq!(apply("0&x"), (Some("0".to_string()), vec![Step::AndZero]));
    }

    #[test]
    fn unrelated_operator() {
        assert_eq!(apply("x|y"), (None, vec![]));
        assert_eq!(apply("x+1"), (None, vec![]));
    }
}
