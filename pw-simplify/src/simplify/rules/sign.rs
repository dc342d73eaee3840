//! Collapses a binary `+` / `-` followed by a unary sign into a single operator.

use crate::node::Node;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use pw_parser::parser::token::op::{BinOpKind, UnaryOpKind};

/// `a-+b = a-b`
/// `a+-b = a-b`
/// `a--b = a+b`
/// `a++b = a+b`
pub fn collapse_signs(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Binary(op, lhs, rhs) = expr else {
        return None;
    };
    let Node::Unary(sign, operand) = &**rhs else {
        return None;
    };

    let op = match (op, sign) {
        (BinOpKind::Sub, UnaryOpKind::Plus) | (BinOpKind::Add, UnaryOpKind::Neg) => BinOpKind::Sub,
        (BinOpKind::Sub, UnaryOpKind::Neg) | (BinOpKind::Add, UnaryOpKind::Plus) => BinOpKind::Add,
        _ => return None,
    };

    step_collector.push(Step::CollapseSigns);
    Some(Node::Binary(op, lhs.clone(), operand.clone()))
}

/// Applies all sign rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    collapse_signs(expr, step_collector)
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
    fn all_sign_pairs() {
        assert_eq!(apply("a-+b"), Some("a-b".to_string()));
        assert_eq!(apply("a+-b"), Some("a-b".to_string()));
        assert_eq!(apply("a--b"), Some("a+b".to_string()));
        assert_eq!(apply("a++b"), Some("a+b".to_string()));
    }

    #[test]
    fn grouped_operand_keeps_grouping() {
        assert_eq!(apply("a--(b+c)"), Some("a+(b+c)".to_string()));
        assert_eq!(apply("a+-(b-c)"), Some("a-(b-c)".to_string()));
    }

    #[test]
    fn other_operators() {
        assert_eq!(apply("a*-b"), None);
        assert_eq!(apply("-a+b"), None);
    }
}
