//! Folding of the conditional function `if_func(condition, then, else)`.

use crate::node::Node;
use crate::simplify::{rules::do_call, step::Step};
use crate::step_collector::StepCollector;
use pw_parser::parser::token::op::BinOpKind;

/// `if_func(0, a, b) = b`
pub fn if_false(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_call(expr, "if_func", 3, |args| {
        args[0].is_number(0.0).then(|| args[2].clone())
    })?;

    step_collector.push(Step::IfFalse);
    Some(opt)
}

/// `if_func(1, a, b) = a`
pub fn if_true(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_call(expr, "if_func", 3, |args| {
        args[0].is_number(1.0).then(|| args[1].clone())
    })?;

    step_collector.push(Step::IfTrue);
    Some(opt)
}

/// `if_func(c, a, a) = a`
pub fn if_same_branches(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_call(expr, "if_func", 3, |args| {
        (args[1] == args[2]).then(|| args[1].clone())
    })?;

    step_collector.push(Step::IfSameBranches);
    Some(opt)
}

/// `if_func(c, if_func(c, a, b), d) = if_func(c, a, d)`
pub fn if_nested_condition(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_call(expr, "if_func", 3, |args| {
        let inner = args[1].as_call("if_func").filter(|inner| inner.len() == 3)?;
        (inner[0] == args[0]).then(|| Node::call("if_func", vec![
            args[0].clone(),
            inner[1].clone(),
            args[2].clone(),
        ]))
    })?;

    step_collector.push(Step::IfNestedCondition);
    Some(opt)
}

/// `if_func(a==0, b, if_func(a, c, d)) = if_func(a, c, b)`
///
/// The branches of the result are `c` and `b`, in that order.
pub fn if_inverted_equality(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_call(expr, "if_func", 3, |args| {
        let Node::Binary(BinOpKind::Eq, value, zero) = &args[0] else {
            return None;
        };
        if !zero.is_number(0.0) {
            return None;
        }

        let inner = args[2].as_call("if_func").filter(|inner| inner.len() == 3)?;
        (inner[0] == **value).then(|| Node::call("if_func", vec![
            inner[0].clone(),
            inner[1].clone(),
            args[1].clone(),
        ]))
    })?;

    step_collector.push(Step::IfInvertedEquality);
    Some(opt)
}

/// `if_func(c, 1, 0) = c`
pub fn if_condition(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_call(expr, "if_func", 3, |args| {
        (args[1].is_number(1.0) && args[2].is_number(0.0)).then(|| args[0].clone())
    })?;

    step_collector.push(Step::IfCondition);
    Some(opt)
}

/// Applies all conditional rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    if_false(expr, step_collector)
        .or_else(|| if_true(expr, step_collector))
        .or_else(|| if_same_branches(expr, step_collector))
        .or_else(|| if_nested_condition(expr, step_collector))
        .or_else(|| if_inverted_equality(expr, step_collector))
        .or_else(|| if_condition(expr, step_collector))
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
    fn literal_conditions() {
        assert_eq!(apply("if_func(0, a, b)"), (Some("b".to_string()), vec![Step::IfFalse]));
        assert_eq!(apply("if_func(1, a, b)"), (Some("a".to_string()), vec![Step::IfTrue]));
    }

    #[test]
    fn same_branches() {
        assert_eq!(
            apply("if_func(a>b, c+1, c+1)"),
            (Some("c+1".to_string()), vec![Step::IfSameBranches]),
        );
    }

    #[test]
    fn nested_same_condition() {
        assert_eq!(
            apply("if_func(x>0, if_func(x>0, a, b), d)"),
            (Some("if_func(x>0, a, d)".to_string()), vec![Step::IfNestedCondition]),
        );
    }

    #[test]
    fn inverted_equality_keeps_branch_order() {
        assert_eq!(
            apply("if_func(n==0, b, if_func(n, c, d))"),
            (Some("if_func(n, c, b)".to_string()), vec![Step::IfInvertedEquality]),
        );
        assert_eq!(apply("if_func(n==1, b, if_func(n, c, d))"), (None, vec![]));
    }

    #[test]
    fn condition_as_value() {
        assert_eq!(apply("if_func(a<b, 1, 0)"), (Some("a<b".to_string()), vec![Step::IfCondition]));
        assert_eq!(apply("if_func(a<b, 0, 1)"), (None, vec![]));
    }

    #[test]
    fn wrong_arity_is_untouched() {
        assert_eq!(apply("if_func(0, a)"), (None, vec![]));
    }
}
