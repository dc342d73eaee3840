//! Resolution of variable and function names.

use crate::{builtin, error::{kind, RenderError}, helpers::helper_names};
use levenshtein::levenshtein;

/// Returns the display form of a name.
///
/// In typeset mode, a name of the form `word_subscript` is rendered with its subscript grouped,
/// `word_{subscript}`. Any other name, and every name in plain mode, is returned unchanged.
pub fn display_name(name: &str, typeset: bool) -> String {
    if typeset {
        if let Some((word, subscript)) = name.split_once('_') {
            let simple = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric());
            if simple(word) && simple(subscript) {
                return format!("{}_{{{}}}", word, subscript);
            }
        }
    }

    name.to_owned()
}

/// Validates names against the known-name set, and maps them to their display form.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    /// Names supplied by the caller, in addition to the builtin names.
    known_names: &'a [String],

    /// Whether unknown names are an error.
    strict: bool,

    /// Whether names are displayed in typeset mode.
    typeset: bool,
}

impl<'a> NameResolver<'a> {
    /// Creates a new resolver.
    pub fn new(known_names: &'a [String], strict: bool, typeset: bool) -> Self {
        Self { known_names, strict, typeset }
    }

    /// Returns true if the name is supplied by the caller, is a builtin or layout function, a
    /// constant, or a helper function.
    pub fn is_known(&self, name: &str) -> bool {
        self.known_names.iter().any(|known| known == name)
            || builtin::NAMES.contains(name)
            || helper_names().iter().any(|helper| helper == name)
    }

    /// Returns the known names that are similar to the given name.
    pub fn similar_names(&self, name: &str) -> Vec<String> {
        let mut similar = self.known_names.iter()
            .map(String::as_str)
            .chain(builtin::NAMES.iter().copied())
            .chain(helper_names().iter().map(String::as_str))
            .filter(|known| levenshtein(known, name) < 2)
            .map(str::to_owned)
            .collect::<Vec<_>>();
        similar.sort();
        similar.dedup();
        similar
    }

    /// In strict mode, checks that the name is known.
    pub fn check(&self, name: &str, function: bool) -> Result<(), RenderError> {
        if !self.strict || self.is_known(name) {
            return Ok(());
        }

        Err(RenderError::new(name, kind::UnknownName {
            name: name.to_owned(),
            function,
            suggestions: self.similar_names(name),
        }))
    }

    /// Checks the name in strict mode, and returns its display form.
    pub fn resolve(&self, name: &str, function: bool) -> Result<String, RenderError> {
        self.check(name, function)?;
        Ok(display_name(name, self.typeset))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn subscript_in_typeset_mode() {
        assert_eq!(display_name("x_1", true), "x_{1}");
        assert_eq!(display_name("v_max", true), "v_{max}");
        assert_eq!(display_name("x_1", false), "x_1");
        assert_eq!(display_name("a_b_c", true), "a_b_c");
        assert_eq!(display_name("_x", true), "_x");
        assert_eq!(display_name("x", true), "x");
    }

    #[test]
    fn lenient_mode_accepts_anything() {
        let resolver = NameResolver::new(&[], false, false);
        assert_eq!(resolver.resolve("whatever", false).unwrap(), "whatever");
    }

    #[test]
    fn strict_mode_sources() {
        let known = vec!["speed".to_string()];
        let resolver = NameResolver::new(&known, true, false);

        assert!(resolver.check("speed", false).is_ok());
        assert!(resolver.check("sin", true).is_ok());
        assert!(resolver.check("tau", false).is_ok());
        assert!(resolver.check("array_idx", true).is_ok());
        assert!(resolver.check("xnor", true).is_ok());
        assert!(resolver.check("sped", false).is_err());
    }

    #[test]
    fn unknown_name_suggestions() {
        let known = vec!["speed".to_string()];
        let resolver = NameResolver::new(&known, true, false);
        let err = resolver.check("sped", false).unwrap_err();

        assert_eq!(err.name, "sped");
        assert_eq!(
            err.kind.as_any().downcast_ref::<kind::UnknownName>(),
            Some(&kind::UnknownName {
                name: "sped".to_string(),
                function: false,
                suggestions: vec!["speed".to_string()],
            }),
        );
    }
}
