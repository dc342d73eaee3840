//! Rendering of unary and binary operators.

use crate::error::RenderError;
use crate::node::Node;
use crate::simplify::rules::general::eval_binary;
use pw_parser::parser::token::op::{BinOpKind, UnaryOpKind};
use super::{context::RenderCtx, is_numeric, parse_numeric, Renderer};

/// Returns the symbol used to render a comparison.
fn comparison_symbol(op: BinOpKind) -> &'static str {
    match op {
        BinOpKind::Eq => "=",
        BinOpKind::GreaterEq => "\\ge ",
        BinOpKind::LessEq => "\\le ",
        op => op.symbol(),
    }
}

/// Returns true if the text begins with a digit, ignoring any opening braces.
fn starts_with_digit(text: &str) -> bool {
    text.trim_start_matches('{')
        .starts_with(|c: char| c.is_ascii_digit())
}

impl Renderer<'_> {
    /// Renders a prefix operator, grouping the operand if it is an operator itself.
    pub(super) fn render_unary(&self, op: UnaryOpKind, operand: &Node) -> Result<String, RenderError> {
        let text = self.render(operand)?;
        if operand.is_operator() {
            Ok(format!("{}{}", op.symbol(), self.group(&text)))
        } else {
            Ok(format!("{}{}", op.symbol(), text))
        }
    }

    /// Renders a binary operator.
    pub(super) fn render_binary(
        &self,
        op: BinOpKind,
        lhs: &Node,
        rhs: &Node,
        ctx: RenderCtx,
    ) -> Result<String, RenderError> {
        // keep the output re-parsable
        if self.options.partial_simplify {
            return Ok(format!("({}){}({})", self.render(lhs)?, op.symbol(), self.render(rhs)?));
        }

        match op {
            op if op.is_logical() => self.render_chain(op, lhs, rhs, ctx),
            BinOpKind::NotEq => self.render_if(
                &Node::binary(BinOpKind::Eq, lhs.clone(), rhs.clone()),
                &Node::Constant(0.0),
                &Node::Constant(1.0),
            ),
            op if op.is_comparison() => self.render_comparison(op, lhs, rhs, ctx),
            op => self.render_arithmetic(op, lhs, rhs),
        }
    }

    /// Renders a `|` or `&` chain, flattening consecutive links of the same operator into one
    /// bracketed list.
    ///
    /// `a|b|c` renders as `\left\{a=1,b=1,c=1,0\right\}`, and `a&b` as
    /// `\left\{a=1\right\}\left\{b=1\right\}`.
    fn render_chain(
        &self,
        op: BinOpKind,
        lhs: &Node,
        rhs: &Node,
        ctx: RenderCtx,
    ) -> Result<String, RenderError> {
        let is_or = op == BinOpKind::Or;
        let mut texts = Vec::with_capacity(2);
        let mut items = Vec::with_capacity(2);

        for operand in [lhs, rhs] {
            match operand {
                Node::Binary(child, _, _) if *child == op => {
                    let text = self.render_with(operand, RenderCtx::chained())?;
                    items.push(text.clone());
                    texts.push(text);
                },
                _ => {
                    let text = self.render_with(operand, RenderCtx::unencased())?;
                    let truth = if operand.is_operator() { "" } else { "=1" };
                    items.push(if is_or {
                        format!("{}{}", text, truth)
                    } else {
                        format!("\\left\\{{{}{}\\right\\}}", text, truth)
                    });
                    texts.push(text);
                },
            }
        }

        // `1` satisfies an `|` chain, `0` fails an `&` chain
        let absorbing = if is_or { "1" } else { "0" };
        if texts.iter().any(|text| text == absorbing) {
            return Ok(absorbing.to_owned());
        }

        let body = if is_or {
            items.join(",")
        } else {
            items.concat()
        };

        if ctx.secondary_binary {
            return Ok(body);
        }

        let chain = if is_or {
            format!("\\left\\{{{},0\\right\\}}", body)
        } else {
            body
        };

        if ctx.encase_logical {
            Ok(chain)
        } else {
            Ok(format!("{}=1", chain))
        }
    }

    /// Renders a comparison. Comparisons between two numbers are evaluated.
    fn render_comparison(
        &self,
        op: BinOpKind,
        lhs: &Node,
        rhs: &Node,
        ctx: RenderCtx,
    ) -> Result<String, RenderError> {
        let a = self.render(lhs)?;
        let b = self.render(rhs)?;

        if let (Some(a), Some(b)) = (parse_numeric(&a), parse_numeric(&b)) {
            return Ok(if eval_binary(op, a, b) != 0.0 { "1" } else { "0" }.to_owned());
        }

        let symbol = comparison_symbol(op);
        if ctx.encase_logical {
            Ok(format!("\\left\\{{{}{}{},0\\right\\}}", a, symbol, b))
        } else {
            Ok(format!("{}{}{}", a, symbol, b))
        }
    }

    /// Renders `+`, `-`, `*`, `/` and `^`.
    fn render_arithmetic(&self, op: BinOpKind, lhs: &Node, rhs: &Node) -> Result<String, RenderError> {
        let mut a = self.render(lhs)?;
        let mut b = self.render(rhs)?;
        let numeric = is_numeric(&a) || is_numeric(&b);

        // a term with a different additive operator must be grouped, except in a fraction
        let needs_group = |operand: &Node| {
            op != BinOpKind::Div
                && matches!(operand.operator_symbol(), Some(s) if (s == "+" || s == "-") && s != op.symbol())
        };
        let is_sum = |operand: &Node| {
            matches!(operand, Node::Binary(child, _, _) if child.is_additive())
        };
        let lhs_grouped = needs_group(lhs);
        let mut rhs_grouped = needs_group(rhs) || (op == BinOpKind::Sub && is_sum(rhs));

        // `a+-b` is rendered as `a-b`, and `a--b` as `a+b`; a sum starting with a negated term
        // keeps its sign inside the group
        let mut symbol = op.symbol();
        if op.is_additive() && b.starts_with('-') {
            if is_sum(rhs) {
                rhs_grouped = true;
            } else {
                b.remove(0);
                symbol = if op == BinOpKind::Add { "-" } else { "+" };
                rhs_grouped = false;
            }
        }

        if lhs_grouped {
            a = self.group(&a);
        }
        if rhs_grouped {
            b = self.group(&b);
        }

        Ok(match op {
            BinOpKind::Div => format!("\\frac{{{}}}{{{}}}", a, b),
            BinOpKind::Exp => {
                if !lhs_grouped && (lhs.is_call("pow") || a.contains(['-', '+', '*', '/'])) {
                    a = self.group(&a);
                }
                format!("{{{}}}^{{{}}}", a, b)
            },
            BinOpKind::Mul => {
                // adjacent digits would read as one number, and adjacent brackets as indexing
                let digits = numeric && starts_with_digit(&a) && starts_with_digit(&b);
                if digits || lhs.is_call("array") || rhs.is_call("array") {
                    format!("{}\\cdot{}", a, b)
                } else {
                    format!("{}{}", a, b)
                }
            },
            _ => format!("{}{}{}", a, symbol, b),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{options::RenderOptionsBuilder, parse};
    use super::*;

    /// Renders the input without normalizing it first.
    fn plain(input: &str) -> String {
        let options = RenderOptionsBuilder::new().build();
        Renderer::new(&options).render(&parse(input).unwrap()).unwrap()
    }

    fn partial(input: &str) -> String {
        let options = RenderOptionsBuilder::new().partial_simplify(true).build();
        Renderer::new(&options).render(&parse(input).unwrap()).unwrap()
    }

    #[test]
    fn or_chain_is_flattened() {
        assert_eq!(plain("a|b|c"), "\\left\\{a=1,b=1,c=1,0\\right\\}");
        assert_eq!(plain("a>0|b"), "\\left\\{a>0,b=1,0\\right\\}");
    }

    #[test]
    fn and_chain_is_juxtaposed() {
        assert_eq!(plain("a&b"), "\\left\\{a=1\\right\\}\\left\\{b=1\\right\\}");
        assert_eq!(plain("a>0&b<1&c"), "\\left\\{a>0\\right\\}\\left\\{b<1\\right\\}\\left\\{c=1\\right\\}");
    }

    #[test]
    fn mixed_chain_is_nested() {
        assert_eq!(
            plain("(a|b)&c"),
            "\\left\\{\\left\\{a=1,b=1,0\\right\\}=1\\right\\}\\left\\{c=1\\right\\}",
        );
    }

    #[test]
    fn chain_short_circuit() {
        assert_eq!(plain("x+y|1"), "1");
        assert_eq!(plain("(a|b)&0"), "0");
        assert_eq!(plain("a|2>1"), "1");
    }

    #[test]
    fn comparisons() {
        assert_eq!(plain("a>=b"), "\\left\\{a\\ge b,0\\right\\}");
        assert_eq!(plain("a==b"), "\\left\\{a=b,0\\right\\}");
        assert_eq!(plain("2<=3"), "1");
        assert_eq!(plain("a!=b"), "\\left\\{a=b:0,1\\right\\}");
        assert_eq!(plain("2!=2"), "0");
    }

    #[test]
    fn absorbed_minus() {
        assert_eq!(plain("a+-b"), "a-b");
        assert_eq!(plain("a+(-b)"), "a-b");
        assert_eq!(plain("a--b"), "a+b");
        assert_eq!(plain("a+-(x+1)"), "a-\\left(x+1\\right)");
    }

    #[test]
    fn negated_sum_keeps_its_sign() {
        assert_eq!(plain("a+(-b-c)"), "a+\\left(-b-c\\right)");
        assert_eq!(plain("a-(-b-c)"), "a-\\left(-b-c\\right)");
    }

    #[test]
    fn subtracted_sum_is_grouped() {
        assert_eq!(plain("a-(b-c)"), "a-\\left(b-c\\right)");
        assert_eq!(plain("a-b-c"), "a-b-c");
        assert_eq!(plain("a+(b-c)"), "a+\\left(b-c\\right)");
    }

    #[test]
    fn additive_grouping() {
        assert_eq!(plain("(a+b)c"), "\\left(a+b\\right)c");
        assert_eq!(plain("a-(b+c)"), "a-\\left(b+c\\right)");
        assert_eq!(plain("(a-b)+c"), "\\left(a-b\\right)+c");
        assert_eq!(plain("(a+b)/(c-d)"), "\\frac{a+b}{c-d}");
        assert_eq!(plain("x*-y"), "x\\left(-y\\right)");
    }

    #[test]
    fn exponent_base() {
        assert_eq!(plain("x^2"), "{x}^{2}");
        assert_eq!(plain("(x+1)^2"), "{\\left(x+1\\right)}^{2}");
        assert_eq!(plain("(-x)^2"), "{\\left(-x\\right)}^{2}");
        assert_eq!(plain("pow(x,2)^3"), "{\\left({x}^{2}\\right)}^{3}");
    }

    #[test]
    fn multiplication_symbol() {
        assert_eq!(plain("2x"), "2x");
        assert_eq!(plain("2*3"), "2\\cdot3");
        assert_eq!(plain("2*3^x"), "2\\cdot{3}^{x}");
        assert_eq!(plain("x^2*y^3"), "{x}^{2}{y}^{3}");
        assert_eq!(plain("array(1,2)*x"), "[1,2]\\cdotx");
    }

    #[test]
    fn unary_operand_grouping() {
        assert_eq!(plain("-x"), "-x");
        assert_eq!(plain("-(x+1)"), "-\\left(x+1\\right)");
    }

    #[test]
    fn partial_mode_stays_parsable() {
        assert_eq!(partial("a+b*c"), "(a)+((b)*(c))");
        assert_eq!(partial("a!=b"), "(a)!=(b)");
        assert_eq!(partial("-(x+1)"), "-((x)+(1))");
    }
}
