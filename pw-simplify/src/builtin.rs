//! Catalog of the builtin functions and constants of the graphing language, partitioned by the
//! number of arguments they accept.
//!
//! `range` is not listed here; the `range(a, b)` layout owns that name.

use crate::render::func::{Func, TexFunc};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Builtin functions that take no arguments.
pub const ZERO_ARGS: &[&str] = &["random"];

/// Builtin functions that take exactly one argument.
pub const ONE_ARG: &[&str] = &[
    "sin", "cos", "tan", "csc", "sec", "cot",
    "arcsin", "arccos", "arctan", "arccsc", "arcsec", "arccot",
    "sinh", "cosh", "tanh", "csch", "sech", "coth",
    "arcsinh", "arccosh", "arctanh", "arccsch", "arcsech", "arccoth",
    "ln", "log", "exp", "floor", "ceil", "round", "abs", "sign", "factorial",
];

/// Builtin functions that take exactly two arguments.
pub const TWO_ARGS: &[&str] = &["mod", "nCr", "nPr", "distance", "midpoint"];

/// Builtin functions that take exactly three arguments.
pub const THREE_ARGS: &[&str] = &["normaldist", "binomialdist"];

/// Builtin functions that take any number of arguments.
pub const MULTI_ARGS: &[&str] = &[
    "min", "max", "gcd", "lcm", "mean", "median", "total", "stdev", "var", "sort", "unique",
    "join", "length",
];

/// Mathematical constants, rendered as `\name ` when called.
pub const CONSTANTS: &[&str] = &["pi", "tau"];

/// Every name known to the renderer without being supplied by the caller: the builtin catalog,
/// the constants, and the functions with their own layout.
pub static NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ZERO_ARGS.iter()
        .chain(ONE_ARG)
        .chain(TWO_ARGS)
        .chain(THREE_ARGS)
        .chain(MULTI_ARGS)
        .chain(CONSTANTS)
        .copied()
        .chain(Func::ALL.iter().map(|func| func.name()))
        .chain(TexFunc::ALL.iter().map(|func| func.name()))
        .collect()
});

/// Returns true if the builtin function with the given name accepts the given number of
/// arguments.
pub fn accepts(name: &str, args: usize) -> bool {
    let fixed = match args {
        0 => ZERO_ARGS,
        1 => ONE_ARG,
        2 => TWO_ARGS,
        3 => THREE_ARGS,
        _ => &[],
    };

    fixed.contains(&name) || MULTI_ARGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_is_checked() {
        assert!(accepts("sin", 1));
        assert!(!accepts("sin", 2));
        assert!(accepts("mod", 2));
        assert!(accepts("max", 5));
        assert!(!accepts("unknown", 1));
    }

    #[test]
    fn range_is_not_a_catalog_builtin() {
        for catalog in [ZERO_ARGS, ONE_ARG, TWO_ARGS, THREE_ARGS, MULTI_ARGS] {
            assert!(!catalog.contains(&"range"));
        }

        // the dispatch table still makes it a known name
        assert!(NAMES.contains("range"));
    }

    #[test]
    fn layout_functions_are_known() {
        assert!(NAMES.contains("if_func"));
        assert!(NAMES.contains("array_map"));
        assert!(NAMES.contains("ceil"));
    }
}
