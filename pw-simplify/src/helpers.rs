//! Definitions of the helper functions the graphing language does not provide natively.
//!
//! The definitions are a static resource in the language's own syntax, handed as-is to whatever
//! evaluates the rendered output. This crate only needs to know which names they define, so that
//! strict mode accepts calls to them.

use once_cell::sync::Lazy;
use pw_parser::tokenizer::{tokenize_complete, TokenKind};

/// The version of [`HELPERS`]. Bumped whenever the definitions change.
pub const HELPERS_VERSION: u32 = 1;

/// Source text of the helper function definitions.
pub const HELPERS: &str = "
inline function select(a) => a != 0;

inline function notSelect(a) => a == 0;

inline function not(a) => a == 0;

inline function nand(a, b) => not(and(a, b));

inline function nor(a, b) => not(or(a, b));

inline function xor(a, b) => a != b;

inline function xnor(a, b) => a == b;

inline function isPositive(a) => a > 0;

inline function isNegative(a) => a < 0;

inline function isPositiveOrZero(a) => a >= 0;

inline function isNegativeOrZero(a) => a <= 0;";

/// The names of the functions defined in [`HELPERS`], extracted on first use.
static HELPER_NAMES: Lazy<Vec<String>> = Lazy::new(|| defined_names(HELPERS));

/// Returns the names of the functions defined in [`HELPERS`].
pub fn helper_names() -> &'static [String] {
    &HELPER_NAMES
}

/// Returns the name following each `function` keyword in the given source.
fn defined_names(source: &str) -> Vec<String> {
    let tokens = tokenize_complete(source);
    let mut significant = tokens.iter().filter(|token| !token.is_whitespace()).peekable();
    let mut names = Vec::new();

    while let Some(token) = significant.next() {
        if token.kind != TokenKind::Name || token.lexeme != "function" {
            continue;
        }

        if let Some(name) = significant.next_if(|next| next.kind == TokenKind::Name) {
            names.push(name.lexeme.to_owned());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn all_helpers_are_found() {
        assert_eq!(helper_names(), [
            "select",
            "notSelect",
            "not",
            "nand",
            "nor",
            "xor",
            "xnor",
            "isPositive",
            "isNegative",
            "isPositiveOrZero",
            "isNegativeOrZero",
        ]);
    }

    #[test]
    fn keyword_without_name() {
        assert_eq!(defined_names("function (a) => a; function f(x) => x"), ["f"]);
    }
}
