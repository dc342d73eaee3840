//! General-purpose rules, applied after the domain-specific ones: constant folding and the
//! additive / exponent identities.

use crate::node::Node;
use crate::simplify::{rules::{do_binary, do_unary}, step::Step};
use crate::step_collector::StepCollector;
use pw_parser::parser::token::op::{BinOpKind, UnaryOpKind};

/// Converts a boolean into the numbers `1` and `0` used for logical values.
fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Evaluates the binary operation on two numbers.
pub(crate) fn eval_binary(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOpKind::Exp => lhs.powf(rhs),
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Greater => truth(lhs > rhs),
        BinOpKind::GreaterEq => truth(lhs >= rhs),
        BinOpKind::Less => truth(lhs < rhs),
        BinOpKind::LessEq => truth(lhs <= rhs),
        BinOpKind::Eq => truth(lhs == rhs),
        BinOpKind::NotEq => truth(lhs != rhs),
        BinOpKind::And => truth(lhs != 0.0 && rhs != 0.0),
        BinOpKind::Or => truth(lhs != 0.0 || rhs != 0.0),
    }
}

/// Evaluates a binary operation whose operands are both number literals. The operation is left
/// alone if the result is not a finite number.
///
/// `2+3 = 5`
/// `2>3 = 0`
pub fn fold_constants(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Binary(op, lhs, rhs) = expr else {
        return None;
    };

    let value = eval_binary(*op, lhs.as_number()?, rhs.as_number()?);
    if !value.is_finite() {
        return None;
    }

    step_collector.push(Step::FoldConstants);
    Some(Node::number(value))
}

/// `a+0 = a`
/// `0+a = a`
/// `a-0 = a`
pub fn add_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if rhs.is_number(0.0) {
            Some(lhs.clone())
        } else if lhs.is_number(0.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })
        .or_else(|| do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
            rhs.is_number(0.0).then(|| lhs.clone())
        }))?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `0-a = -a`
pub fn subtract_from_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        lhs.is_number(0.0).then(|| Node::unary(UnaryOpKind::Neg, rhs.clone()))
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `0/a = 0`
pub fn divide_into_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, _| {
        lhs.is_number(0.0).then(|| Node::Constant(0.0))
    })?;

    step_collector.push(Step::DivideIntoZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        rhs.is_number(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Exp, |_, rhs| {
        rhs.is_number(0.0).then(|| Node::Constant(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `--a = a`
/// `+a = a`
pub fn redundant_unary(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Plus, |operand| Some(operand.clone()))
        .or_else(|| do_unary(expr, UnaryOpKind::Neg, |operand| {
            do_unary(operand, UnaryOpKind::Neg, |inner| Some(inner.clone()))
        }))?;

    step_collector.push(Step::RedundantUnary);
    Some(opt)
}

/// Applies all general rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold_constants(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| subtract_from_zero(expr, step_collector))
        .or_else(|| divide_into_zero(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| redundant_unary(expr, step_collector))
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
    fn fold_arithmetic() {
        assert_eq!(apply("2+3"), Some("5".to_string()));
        assert_eq!(apply("2^10"), Some("1024".to_string()));
        assert_eq!(apply("1/4"), Some("0.25".to_string()));
        assert_eq!(apply("2-5"), Some("-3".to_string()));
    }

    #[test]
    fn fold_comparisons_and_logic() {
        assert_eq!(apply("3>=3"), Some("1".to_string()));
        assert_eq!(apply("2==3"), Some("0".to_string()));
        assert_eq!(apply("2!=3"), Some("1".to_string()));
        assert_eq!(apply("2&0.5"), Some("1".to_string()));
    }

    #[test]
    fn non_finite_results_are_kept() {
        assert_eq!(apply("10^400"), None);
        assert_eq!(apply("0^-1"), None);
    }

    #[test]
    fn negative_operands() {
        assert_eq!(apply("-2*3"), Some("-6".to_string()));
    }

    #[test]
    fn identities() {
        assert_eq!(apply("x+0"), Some("x".to_string()));
        assert_eq!(apply("0+x"), Some("x".to_string()));
        assert_eq!(apply("x-0"), Some("x".to_string()));
        assert_eq!(apply("0-x"), Some("-x".to_string()));
        assert_eq!(apply("0/x"), Some("0".to_string()));
        assert_eq!(apply("x^1"), Some("x".to_string()));
        assert_eq!(apply("(x+1)^0"), Some("1".to_string()));
    }

    #[test]
    fn redundant_signs() {
        assert_eq!(apply("--x"), Some("x".to_string()));
        assert_eq!(apply("+x"), Some("x".to_string()));
        assert_eq!(apply("-x"), None);
    }
}
