//! Rendering of normalized trees to graphing-calculator markup.
//!
//! The same tree can be rendered in two modes: plain mode, whose output the calculator reads as
//! an expression, and typeset mode, which uses conventional mathematical notation where the two
//! differ. Partial simplification mode instead emits text that can be parsed again.

pub mod context;
pub mod func;

mod call;
mod fold;
mod op;

use crate::{error::RenderError, name::NameResolver, node::Node, options::RenderOptions};
use context::RenderCtx;
use pw_parser::tokenizer::{tokenize_complete, Token, TokenKind};

/// Returns the number represented by the rendered text, if the text is a single number literal,
/// optionally negated.
///
/// Only literals the grammar itself accepts count, so the product `2e3` is not a number.
pub(crate) fn parse_numeric(text: &str) -> Option<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    match &*tokenize_complete(digits) {
        [Token { kind: TokenKind::Int | TokenKind::Float, .. }] => text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite()),
        _ => None,
    }
}

/// Returns true if the rendered text is a finite number.
pub(crate) fn is_numeric(text: &str) -> bool {
    parse_numeric(text).is_some()
}

/// Formats a number the way it is written in source. Negative zero is written as `0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}

/// Renders trees with a fixed set of options.
#[derive(Debug)]
pub struct Renderer<'a> {
    options: &'a RenderOptions,
    names: NameResolver<'a>,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer with the given options.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            names: NameResolver::new(&options.known_names, options.strict, options.typeset),
        }
    }

    /// Renders the given tree.
    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        self.render_with(node, RenderCtx::default())
    }

    /// Renders the given tree in the given context.
    pub fn render_with(&self, node: &Node, ctx: RenderCtx) -> Result<String, RenderError> {
        match node {
            Node::Constant(value) => Ok(format_number(*value)),
            Node::Symbol(name) if self.options.partial_simplify => Ok(name.clone()),
            Node::Symbol(name) => self.names.resolve(name, false),
            Node::Unary(op, operand) => self.render_unary(*op, operand),
            Node::Binary(op, lhs, rhs) => self.render_binary(*op, lhs, rhs, ctx),
            Node::Call(name, args) => self.render_call(name, args),
        }
    }

    /// Wraps the text in grouping parentheses appropriate for the mode.
    fn group(&self, text: &str) -> String {
        if self.options.partial_simplify {
            format!("({})", text)
        } else {
            format!("\\left({}\\right)", text)
        }
    }
}

/// Renders the given tree with the given options.
pub fn render(node: &Node, options: &RenderOptions) -> Result<String, RenderError> {
    Renderer::new(options).render(node)
}
