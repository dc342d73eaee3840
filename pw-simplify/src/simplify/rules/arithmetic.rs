//! Identities of multiplication and division, and the markers for undefined and infinite values.

use crate::node::Node;
use crate::simplify::{rules::do_binary, step::Step};
use crate::step_collector::StepCollector;
use pw_parser::parser::token::op::BinOpKind;

/// `a*0 = 0`
/// `0*a = 0`
///
/// A point multiplied by zero is left to [`super::point::scale_point`], which keeps it a point.
pub fn multiply_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        let zero_times = |zero: &Node, other: &Node| zero.is_number(0.0) && !other.is_call("point");
        if zero_times(lhs, rhs) || zero_times(rhs, lhs) {
            Some(Node::Constant(0.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `a*1 = a`
/// `1*a = a`
pub fn multiply_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if rhs.is_number(1.0) {
            Some(lhs.clone())
        } else if lhs.is_number(1.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_number(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `a/0 = undef(a)`
///
/// Division by a literal zero is not an error; the result is kept as an explicit marker.
pub fn divide_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_number(0.0).then(|| Node::call("undef", vec![lhs.clone()]))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `Infinity = inf()`
pub fn infinity(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    match expr {
        Node::Symbol(name) if name == "Infinity" => {
            step_collector.push(Step::Infinity);
            Some(Node::call("inf", Vec::new()))
        },
        _ => None,
    }
}

/// Applies all multiplication and division rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| divide_one(expr, step_collector))
        .or_else(|| divide_zero(expr, step_collector))
        .or_else(|| infinity(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parse;
    use super::*;

    fn apply(input: &str) -> Option<String> {
        all(&parse(input).unwrap(), &mut ()).map(|node| node.to_string())
    }

    #[test]
    fn multiply_by_zero() {
        assert_eq!(apply("x*0"), Some("0".to_string()));
        assert_eq!(apply("0(a+b)"), Some("0".to_string()));
    }

    #[test]
    fn zero_point_is_not_a_number() {
        assert_eq!(apply("0*point(1, 2)"), None);
    }

    #[test]
    fn multiply_and_divide_by_one() {
        assert_eq!(apply("1x"), Some("x".to_string()));
        assert_eq!(apply("(a-b)/1"), Some("a-b".to_string()));
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(apply("(x+1)/0"), Some("undef(x+1)".to_string()));
    }

    #[test]
    fn infinity_symbol() {
        assert_eq!(apply("Infinity"), Some("inf()".to_string()));
        assert_eq!(apply("infinity"), None);
    }
}
