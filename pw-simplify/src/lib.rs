//! Simplifier and renderer for the expressions of the piecewise graphing language.
//!
//! Expressions are parsed by [`pw_parser`], converted into a [`Node`] tree, brought into normal
//! form by the rewrite engine in [`simplify`], and rendered to graphing-calculator markup by
//! [`render`]. [`render_expression`] runs the whole pipeline and memoizes its output.
//!
//! ```
//! use pw_simplify::{render_expression, RenderOptions};
//! use std::collections::HashMap;
//!
//! let mut cache = HashMap::new();
//! let options = RenderOptions::default();
//!
//! assert_eq!(render_expression("if_func(x > 0, x * 1, 2 + 3)", &options, &mut cache).unwrap(),
//!     "\\left\\{x>0:x,5\\right\\}");
//! ```

pub mod builtin;
pub mod cache;
pub mod error;
pub mod helpers;
pub mod name;
pub mod node;
pub mod options;
pub mod render;
pub mod simplify;
pub mod step_collector;

pub use cache::RenderCache;
pub use error::{Error, RenderError};
pub use helpers::{HELPERS, HELPERS_VERSION};
pub use node::Node;
pub use options::{RenderOptions, RenderOptionsBuilder};
pub use simplify::{normalize, normalize_with, normalize_with_steps, step::Step};
pub use step_collector::StepCollector;

use log::{debug, error, trace};
use pw_parser::parser::{error::Error as ParseError, expr::Expr, Parser};

/// Parses the given source into a tree.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let expr = Parser::new(input).try_parse_full::<Expr>()?;
    Ok(Node::from(expr))
}

/// Parses, normalizes and renders the given expression.
///
/// The output is looked up in the cache first, and stored in it on success. Entries for partial
/// simplification mode are kept apart from markup entries. The cache key does not include the
/// other options, so a cache should only be shared between calls with the same options.
pub fn render_expression(
    input: &str,
    options: &RenderOptions,
    cache: &mut impl RenderCache,
) -> Result<String, Error> {
    let key = cache::cache_key(input, options.partial_simplify);
    if let Some(cached) = cache.get(&key) {
        trace!("cache hit for `{}`", input);
        return Ok(cached.to_owned());
    }
    trace!("cache miss for `{}`", input);

    let output = render_uncached(input, options).map_err(|err| {
        error!("failed to render `{}`: {}", input, err);
        err
    })?;

    cache.insert(key, output.clone());
    Ok(output)
}

fn render_uncached(input: &str, options: &RenderOptions) -> Result<String, Error> {
    let tree = parse(input)?;
    trace!("parsed `{}` as {:?}", input, tree);

    let (normalized, steps) = normalize_with_steps(&tree);
    if !steps.is_empty() {
        debug!("normalized `{}` to `{}` with {:?}", input, normalized, steps);
    }

    render::render(&normalized, options).map_err(|err| Error::Render(err.locate(input)))
}
