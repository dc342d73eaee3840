//! The expression tree consumed by the rewrite engine and the renderer.

use pw_parser::parser::{
    expr::Expr,
    literal::Literal,
    token::op::{BinOpKind, UnaryOpKind},
    Associativity,
    Precedence,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// Unlike the [`Expr`] produced by the parser, a [`Node`] carries no span information and no
/// parentheses; grouping is implied by the shape of the tree. Every child is exclusively owned by
/// its parent.
///
/// Negative numbers are never stored as a negative [`Node::Constant`]. They are represented as
/// [`Node::Unary`] negation of a non-negative constant, which [`Node::number`] takes care of.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A number literal.
    Constant(f64),

    /// A variable, or a name that is not called.
    Symbol(String),

    /// A prefix unary operation, such as `-x`.
    Unary(UnaryOpKind, Box<Node>),

    /// A binary operation, such as `x + 1` or `a | b`.
    Binary(BinOpKind, Box<Node>, Box<Node>),

    /// A function call, such as `point(1, 2)`.
    Call(String, Vec<Node>),
}

impl Node {
    /// Creates a node representing the given number, using a negation node for negative numbers.
    /// Negative zero becomes a plain zero.
    pub fn number(value: f64) -> Self {
        if value < 0.0 {
            Node::Unary(UnaryOpKind::Neg, Box::new(Node::Constant(-value)))
        } else if value == 0.0 {
            Node::Constant(0.0)
        } else {
            Node::Constant(value)
        }
    }

    /// Creates a symbol node.
    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    /// Creates a binary operation node.
    pub fn binary(op: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Node::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Creates a unary operation node.
    pub fn unary(op: UnaryOpKind, operand: Node) -> Self {
        Node::Unary(op, Box::new(operand))
    }

    /// Creates a function call node.
    pub fn call(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::Call(name.into(), args)
    }

    /// Returns the numeric value of the node, if it is a number literal or a negated number
    /// literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Node::Constant(value) => Some(*value),
            Node::Unary(UnaryOpKind::Neg, operand) => match **operand {
                Node::Constant(value) => Some(-value),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns true if the node is a number literal equal to the given value.
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns true if the node is an operator node, that is, a unary or binary operation.
    pub fn is_operator(&self) -> bool {
        matches!(self, Node::Unary(..) | Node::Binary(..))
    }

    /// Returns the symbol of the operator at the root of this node, if it is an operator node.
    ///
    /// Unary negation and binary subtraction share the symbol `-`.
    pub fn operator_symbol(&self) -> Option<&'static str> {
        match self {
            Node::Unary(op, _) => Some(op.symbol()),
            Node::Binary(op, _, _) => Some(op.symbol()),
            _ => None,
        }
    }

    /// If the node is a call to the function with the given name, returns its arguments.
    pub fn as_call(&self, name: &str) -> Option<&[Node]> {
        match self {
            Node::Call(target, args) if target == name => Some(args),
            _ => None,
        }
    }

    /// Returns true if the node is a call to the function with the given name.
    pub fn is_call(&self, name: &str) -> bool {
        self.as_call(name).is_some()
    }

    /// Returns the precedence of the operator at the root of this node, or [`None`] if the node
    /// is not an operator node.
    fn precedence(&self) -> Option<Precedence> {
        match self {
            Node::Unary(op, _) => Some(op.precedence()),
            Node::Binary(op, _, _) => Some(op.precedence()),
            _ => None,
        }
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Literal(Literal::Number(num)) => Node::Constant(num.value),
            Expr::Literal(Literal::Symbol(sym)) => Node::Symbol(sym.name),
            Expr::Paren(paren) => Node::from(*paren.expr),
            Expr::Call(call) => Node::Call(
                call.name.name,
                call.args.into_iter().map(Node::from).collect(),
            ),
            Expr::Unary(unary) => Node::unary(unary.op.kind, Node::from(*unary.operand)),
            Expr::Binary(binary) => Node::binary(
                binary.op.kind,
                Node::from(*binary.lhs),
                Node::from(*binary.rhs),
            ),
        }
    }
}

/// Writes the operand of an operator, surrounded by parentheses if it would otherwise bind to the
/// wrong operator when parsed again.
fn fmt_operand(
    f: &mut fmt::Formatter,
    operand: &Node,
    parent: Precedence,
    group_equal: bool,
) -> fmt::Result {
    let group = match operand.precedence() {
        Some(precedence) => precedence < parent || (group_equal && precedence == parent),
        None => false,
    };

    if group {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// Prints the plain, re-parsable form of the expression.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Constant(value) => write!(f, "{}", value),
            Node::Symbol(name) => write!(f, "{}", name),
            Node::Unary(op, operand) => {
                write!(f, "{}", op.symbol())?;
                fmt_operand(f, operand, op.precedence(), false)
            },
            Node::Binary(op, lhs, rhs) => {
                let right = op.associativity() == Associativity::Right;
                fmt_operand(f, lhs, op.precedence(), right)?;
                write!(f, "{}", op.symbol())?;
                fmt_operand(f, rhs, op.precedence(), !right)
            },
            Node::Call(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pw_parser::parser::Parser;
    use super::*;

    fn parse(input: &str) -> Node {
        Parser::new(input).try_parse_full::<Expr>().unwrap().into()
    }

    #[test]
    fn parentheses_are_dropped() {
        assert_eq!(parse("((x))"), Node::symbol("x"));
        assert_eq!(
            parse("2(x + 1)"),
            Node::binary(
                BinOpKind::Mul,
                Node::Constant(2.0),
                Node::binary(BinOpKind::Add, Node::symbol("x"), Node::Constant(1.0)),
            ),
        );
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(Node::number(-3.0), Node::unary(UnaryOpKind::Neg, Node::Constant(3.0)));
        assert_eq!(Node::number(-3.0).as_number(), Some(-3.0));
        assert_eq!(Node::number(0.5), Node::Constant(0.5));
    }

    #[test]
    fn display_is_reparsable() {
        for input in ["a-(b-c)", "(a+b)*c", "2^3^4", "(2^3)^4", "-x^2", "(-x)^2", "if_func(a>b, c, point(1, 2))", "a|b&c"] {
            let node = parse(input);
            assert_eq!(parse(&node.to_string()), node, "{}", input);
        }
    }

    #[test]
    fn display_groups_lower_precedence() {
        assert_eq!(parse("a-(b-c)").to_string(), "a-(b-c)");
        assert_eq!(parse("(a+b)c").to_string(), "(a+b)*c");
        assert_eq!(parse("(x|y)&z").to_string(), "(x|y)&z");
    }

    #[test]
    fn display_follows_associativity() {
        assert_eq!(parse("2^3^4").to_string(), "2^3^4");
        assert_eq!(parse("(2^3)^4").to_string(), "(2^3)^4");
        assert_eq!(parse("a-b-c").to_string(), "a-b-c");
    }
}
