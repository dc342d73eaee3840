//! Tokenizer and parser for the expressions of the piecewise graphing language.
//!
//! The grammar is small: numbers, names, calls such as `point(1, 2)`, prefix `-` / `+`, the
//! arithmetic operators `+ - * / ^`, comparisons, and the logical operators `|` and `&`, which
//! the language treats as arithmetic on `0` / `1`. Adjacent factors multiply implicitly, so `2x`
//! and `3(x + 1)` are valid.
//!
//! ```
//! use pw_parser::parser::{expr::Expr, Parser};
//!
//! let mut parser = Parser::new("2x + point(1, 2)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..16);
//! ```

pub mod parser;
pub mod tokenizer;
