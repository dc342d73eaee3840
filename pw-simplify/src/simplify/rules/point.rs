//! Point algebra: points add componentwise, and scale by the literals `0` and `1`.

use crate::node::Node;
use crate::simplify::{rules::do_binary, step::Step};
use crate::step_collector::StepCollector;
use pw_parser::parser::token::op::BinOpKind;

/// Returns the two coordinates of a `point(x, y)` call.
fn coordinates(expr: &Node) -> Option<(&Node, &Node)> {
    match expr.as_call("point")? {
        [x, y] => Some((x, y)),
        _ => None,
    }
}

/// `point(a, b) + point(c, d) = point(a+c, b+d)`
pub fn add_points(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        let (a, b) = coordinates(lhs)?;
        let (c, d) = coordinates(rhs)?;
        Some(Node::call("point", vec![
            Node::binary(BinOpKind::Add, a.clone(), c.clone()),
            Node::binary(BinOpKind::Add, b.clone(), d.clone()),
        ]))
    })?;

    step_collector.push(Step::AddPoints);
    Some(opt)
}

/// `0*point(a, b) = point(0, 0)`
/// `point(a, b)*0 = point(0, 0)`
/// `1*point(a, b) = point(a, b)`
/// `point(a, b)*1 = point(a, b)`
/// `point(a, b)/1 = point(a, b)`
pub fn scale_point(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let scale = |point: &Node, scalar: &Node| {
        coordinates(point)?;
        if scalar.is_number(0.0) {
            Some(Node::call("point", vec![Node::Constant(0.0), Node::Constant(0.0)]))
        } else if scalar.is_number(1.0) {
            Some(point.clone())
        } else {
            None
        }
    };

    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        scale(rhs, lhs).or_else(|| scale(lhs, rhs))
    })
        .or_else(|| do_binary(expr, BinOpKind::Div, |lhs, rhs| {
            coordinates(lhs)?;
            rhs.is_number(1.0).then(|| lhs.clone())
        }))?;

    step_collector.push(Step::ScalePoint);
    Some(opt)
}

/// Applies all point rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add_points(expr, step_collector)
        .or_else(|| scale_point(expr, step_collector))
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
    fn add_componentwise() {
        assert_eq!(apply("point(a, b) + point(1, 2)"), Some("point(a+1, b+2)".to_string()));
        assert_eq!(apply("point(a, b) + point(1, 2, 3)"), None);
        assert_eq!(apply("point(a, b) - point(1, 2)"), None);
    }

    #[test]
    fn zero_scaled_point() {
        assert_eq!(apply("0*point(a, b)"), Some("point(0, 0)".to_string()));
        assert_eq!(apply("point(a, b)*0"), Some("point(0, 0)".to_string()));
    }

    #[test]
    fn unit_scaled_point() {
        assert_eq!(apply("point(a, b)/1"), Some("point(a, b)".to_string()));
        assert_eq!(apply("point(a, b)*2"), None);
    }
}
