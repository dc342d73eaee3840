use crate::{builtin, error::RenderError, node::Node};
use super::{fold::Fold, func::{Func, TexFunc}, Renderer};

impl Renderer<'_> {
    /// Renders a function call.
    ///
    /// The first applicable rendering wins: a fold, the generic layout in partial mode, the
    /// typeset layout, the shared layout, a constant, a builtin, and finally a user function.
    pub(super) fn render_call(&self, name: &str, args: &[Node]) -> Result<String, RenderError> {
        let mut rendered = match self.fold_call(name, args)? {
            Fold::Folded(text) => return Ok(text),
            Fold::Unfolded(rendered) => rendered,
        };

        if self.options.partial_simplify {
            let texts = (0..args.len())
                .map(|position| self.take_rendered(&mut rendered, args, position))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(format!("{}({})", name, texts.join(",")));
        }

        if self.options.typeset {
            if let Some(func) = TexFunc::from_name(name) {
                return self.render_tex_func(func, args, &mut rendered);
            }
        }

        if let Some(func) = Func::from_name(name) {
            return self.render_func(func, args, &mut rendered);
        }

        if builtin::CONSTANTS.contains(&name) {
            return Ok(format!("\\{} ", name));
        }

        if builtin::accepts(name, args.len()) {
            return Ok(format!("\\operatorname{{{}}}\\left({}\\right)", name, self.render_args(args, ",")?));
        }

        let display = self.names.resolve(name, true)?;
        let separator = if self.options.typeset { ",\\ " } else { "," };
        Ok(format!("{}\\left({}\\right)", display, self.render_args(args, separator)?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{error::kind::UnknownName, options::RenderOptionsBuilder, parse};

    fn render(input: &str, typeset: bool) -> String {
        let options = RenderOptionsBuilder::new().typeset(typeset).build();
        crate::render::render(&parse(input).unwrap(), &options).unwrap()
    }

    #[test]
    fn constants() {
        assert_eq!(render("tau()", false), "\\tau ");
    }

    #[test]
    fn builtins() {
        assert_eq!(render("sin(x)", false), "\\operatorname{sin}\\left(x\\right)");
        assert_eq!(render("max(a,b,c)", true), "\\operatorname{max}\\left(a,b,c\\right)");
        assert_eq!(render("mod(a,b)", false), "\\operatorname{mod}\\left(a,b\\right)");
    }

    #[test]
    fn builtin_with_wrong_arity_is_user_function() {
        assert_eq!(render("sin(x,y)", false), "sin\\left(x,y\\right)");
    }

    #[test]
    fn user_functions() {
        assert_eq!(render("f(x,y)", false), "f\\left(x,y\\right)");
        assert_eq!(render("f_a(x,y)", true), "f_{a}\\left(x,\\ y\\right)");
    }

    #[test]
    fn partial_mode_is_generic() {
        let options = RenderOptionsBuilder::new().partial_simplify(true).build();
        let node = parse("sqrt(if_func(a,b,c))").unwrap();
        assert_eq!(crate::render::render(&node, &options).unwrap(), "sqrt(if_func(a,b,c))");
    }

    #[test]
    fn strict_functions() {
        let options = RenderOptionsBuilder::new()
            .strict(true)
            .known_names(["f", "x"])
            .build();

        assert_eq!(
            crate::render::render(&parse("f(x)+sin(x)").unwrap(), &options).unwrap(),
            "f\\left(x\\right)+\\operatorname{sin}\\left(x\\right)",
        );

        let err = crate::render::render(&parse("g(x)").unwrap(), &options).unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<UnknownName>().unwrap();
        assert_eq!(kind.name, "g");
        assert!(kind.function);
        assert!(kind.suggestions.contains(&"f".to_owned()));
    }
}
