//! Calls that can be rendered as one of their arguments, or evaluated, when the arguments are
//! literal enough.
//!
//! Folding happens before any other call rendering, in both modes. A call that cannot be folded
//! is rendered by its regular layout.

use crate::{error::RenderError, node::Node};
use super::{format_number, parse_numeric, Renderer};

/// The outcome of attempting to fold a call.
#[derive(Debug)]
pub(super) enum Fold {
    /// The call renders as this text.
    Folded(String),

    /// The call is rendered by its layout. Holds the text of each argument rendered while
    /// attempting the fold, by position.
    Unfolded(Vec<Option<String>>),
}

impl Fold {
    /// An unfolded call with no arguments rendered yet.
    fn untouched() -> Self {
        Fold::Unfolded(Vec::new())
    }
}

impl Renderer<'_> {
    /// Attempts to fold the given call.
    pub(super) fn fold_call(&self, name: &str, args: &[Node]) -> Result<Fold, RenderError> {
        match (name, args) {
            ("array_idx", [array, index, ..]) => {
                let Some(elements) = array.as_call("array") else {
                    return Ok(Fold::untouched());
                };
                let index = self.render(index)?;
                // one-based, truncated like an integer parse of the rendered index
                let element = parse_numeric(&index)
                    .map(f64::trunc)
                    .filter(|position| *position >= 1.0)
                    .and_then(|position| elements.get(position as usize - 1));
                match element {
                    Some(element) => Ok(Fold::Folded(self.render_element(element)?)),
                    None => Ok(Fold::Unfolded(vec![None, Some(index)])),
                }
            },
            ("point_x" | "point_y", [point, ..]) => {
                let coordinate = if name == "point_x" { 0 } else { 1 };
                match point.as_call("point").and_then(|coords| coords.get(coordinate)) {
                    Some(element) => Ok(Fold::Folded(self.render_element(element)?)),
                    None => Ok(Fold::untouched()),
                }
            },
            ("pow", [base, exp, ..]) => {
                let base = self.render(base)?;
                let exp = self.render(exp)?;
                let value = parse_numeric(&base)
                    .zip(parse_numeric(&exp))
                    .map(|(base, exp)| base.powf(exp))
                    .filter(|value| value.is_finite());
                match value {
                    Some(value) => Ok(Fold::Folded(format_number(value))),
                    None => Ok(Fold::Unfolded(vec![Some(base), Some(exp)])),
                }
            },
            _ => Ok(Fold::untouched()),
        }
    }

    /// Returns the text of the argument at the given position, rendering it unless an earlier
    /// fold attempt already did.
    pub(super) fn take_rendered(
        &self,
        rendered: &mut [Option<String>],
        args: &[Node],
        position: usize,
    ) -> Result<String, RenderError> {
        match rendered.get_mut(position).and_then(Option::take) {
            Some(text) => Ok(text),
            None => self.render(&args[position]),
        }
    }

    /// Renders an element extracted from a point or array, grouping it if it is an operator.
    fn render_element(&self, element: &Node) -> Result<String, RenderError> {
        let text = self.render(element)?;
        if element.is_operator() {
            Ok(self.group(&text))
        } else {
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{options::RenderOptionsBuilder, parse};
    use super::*;

    fn plain(input: &str) -> String {
        let options = RenderOptionsBuilder::new().build();
        Renderer::new(&options).render(&parse(input).unwrap()).unwrap()
    }

    fn partial(input: &str) -> String {
        let options = RenderOptionsBuilder::new().partial_simplify(true).build();
        Renderer::new(&options).render(&parse(input).unwrap()).unwrap()
    }

    #[test]
    fn array_index() {
        assert_eq!(plain("array_idx(array(a,b,c),2)"), "b");
        assert_eq!(plain("array_idx(array(a,b+1),2)"), "\\left(b+1\\right)");
        assert_eq!(plain("array_idx(array(a,b),2.9)"), "b");
    }

    #[test]
    fn array_index_after_normalizing() {
        let options = RenderOptionsBuilder::new().build();
        let node = crate::normalize(&parse("array_idx(array(a,b),1+1)").unwrap());
        assert_eq!(Renderer::new(&options).render(&node).unwrap(), "b");

        // unfolded arithmetic is not a literal index
        assert_eq!(plain("array_idx(array(a,b),1+1)"), "[a,b][1+1]");
    }

    #[test]
    fn unfolded_arguments_are_reused() {
        let options = RenderOptionsBuilder::new().build();
        let renderer = Renderer::new(&options);
        let node = parse("pow(x,2)").unwrap();
        let Node::Call(name, args) = &node else {
            unreachable!();
        };

        let Fold::Unfolded(mut rendered) = renderer.fold_call(name, args).unwrap() else {
            panic!("`pow(x,2)` should not fold");
        };
        assert_eq!(rendered, vec![Some("x".to_owned()), Some("2".to_owned())]);
        assert_eq!(renderer.take_rendered(&mut rendered, args, 0).unwrap(), "x");
        assert_eq!(rendered[0], None);
    }

    #[test]
    fn nested_powers() {
        assert_eq!(plain("pow(pow(pow(x,2),2),2)"), "{\\left({\\left({x}^{2}\\right)}^{2}\\right)}^{2}");
        assert_eq!(plain("pow(pow(2,2),2)"), "16");
    }

    #[test]
    fn array_index_out_of_range() {
        assert_eq!(plain("array_idx(array(a,b),3)"), "[a,b][3]");
        assert_eq!(plain("array_idx(array(a,b),0)"), "[a,b][0]");
        assert_eq!(plain("array_idx(l,1)"), "l[1]");
    }

    #[test]
    fn point_coordinates() {
        assert_eq!(plain("point_x(point(a,b))"), "a");
        assert_eq!(plain("point_y(point(a,b-c))"), "\\left(b-c\\right)");
        assert_eq!(plain("point_y(point(a))"), "\\left(a\\right).y");
    }

    #[test]
    fn numeric_power() {
        assert_eq!(plain("pow(2,10)"), "1024");
        assert_eq!(plain("pow(4,0.5)"), "2");
        assert_eq!(plain("pow(x,2)"), "{x}^{2}");
    }

    #[test]
    fn folds_in_partial_mode() {
        assert_eq!(partial("point_x(point(a+b,c))"), "((a)+(b))");
        assert_eq!(partial("pow(x,2)"), "pow(x,2)");
    }
}
