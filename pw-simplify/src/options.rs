#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options that control how an expression is rendered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderOptions {
    /// Whether to produce typeset output, which uses conventional mathematical notation (such as
    /// `\left|x\right|` for `abs(x)`) and groups name subscripts. Otherwise, the output is in
    /// plain mode, which the graphing calculator reads as an expression.
    pub typeset: bool,

    /// Whether variables and user functions must be known. In strict mode, rendering fails with
    /// an error naming the first unknown name.
    ///
    /// Builtins, layout functions, constants and helper functions are always known.
    pub strict: bool,

    /// Names that are known in addition to the builtin names, usually the variables and
    /// functions defined by the program being compiled.
    pub known_names: Vec<String>,

    /// Whether to produce re-parsable text instead of markup. Operators are fully parenthesized,
    /// calls keep their source form, and names are not validated.
    ///
    /// Rewrite rules and call folding still apply, so this mode can be used to simplify an
    /// expression in source form.
    pub partial_simplify: bool,
}

impl RenderOptions {
    /// Wraps the given [`RenderOptions`] into a builder for further customization.
    pub fn into_builder(self) -> RenderOptionsBuilder {
        RenderOptionsBuilder(self)
    }
}

/// Helper struct to build a [`RenderOptions`] struct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderOptionsBuilder(RenderOptions);

impl RenderOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to produce typeset output.
    pub fn typeset(mut self, typeset: bool) -> Self {
        self.0.typeset = typeset;
        self
    }

    /// Sets whether unknown names are an error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.0.strict = strict;
        self
    }

    /// Adds a known name.
    pub fn known_name(mut self, name: impl Into<String>) -> Self {
        self.0.known_names.push(name.into());
        self
    }

    /// Adds several known names.
    pub fn known_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.known_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets whether to produce re-parsable text.
    pub fn partial_simplify(mut self, partial_simplify: bool) -> Self {
        self.0.partial_simplify = partial_simplify;
        self
    }

    /// Builds the [`RenderOptions`] struct.
    pub fn build(self) -> RenderOptions {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn builder_accumulates_names() {
        let options = RenderOptionsBuilder::new()
            .strict(true)
            .known_name("a")
            .known_names(vec!["b".to_string(), "c".to_string()])
            .build();

        assert!(options.strict);
        assert!(!options.typeset);
        assert_eq!(options.known_names, ["a", "b", "c"]);
    }

    #[test]
    fn into_builder_keeps_options() {
        let options = RenderOptionsBuilder::new().typeset(true).build();
        let options = options.into_builder().partial_simplify(true).build();

        assert!(options.typeset);
        assert!(options.partial_simplify);
    }
}
