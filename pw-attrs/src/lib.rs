//! `#[derive(ErrorKind)]` for the error kinds of the piecewise crates.

mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Implements `pw_error::ErrorKind` for a struct, from the tags of its `#[error(...)]`
/// attribute:
///
/// - `message` (required): the headline of the report, and the result of `message()`.
/// - `labels`: an array with one label text per span of the error, in span order. An empty text
///   highlights the span without a label.
/// - `help`: a hint printed below the source snippet.
///
/// Each tag is an expression evaluated with `self` and the struct's named fields in scope, and
/// must produce something that implements [`ToString`] (an array of such values for `labels`).
///
/// ```ignore
/// use pw_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not defined", name),
///     labels = ["this name"],
///     help = "check the spelling",
/// )]
/// pub struct Undefined {
///     name: String,
/// }
/// ```
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl pw_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
