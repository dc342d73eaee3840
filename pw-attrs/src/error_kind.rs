use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    MetaNameValue,
    Result,
    Token,
};

/// The tags of an `#[error(...)]` attribute.
#[derive(Debug)]
pub struct ErrorArgs {
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorArgs {
    /// Reads the tags of the given `error` attribute. The struct name is used to point at a
    /// missing `message` tag.
    fn from_attribute(attr: &Attribute, name: &Ident) -> Result<Self> {
        let tags = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        let (mut message, mut labels, mut help) = (None, None, None);

        for tag in tags {
            let slot = match tag.path.get_ident().map(Ident::to_string).as_deref() {
                Some("message") => &mut message,
                Some("labels") => &mut labels,
                Some("help") => &mut help,
                _ => return Err(syn::Error::new_spanned(&tag.path, "expected `message`, `labels` or `help`")),
            };
            if slot.replace(tag.value).is_some() {
                return Err(syn::Error::new_spanned(&tag.path, "duplicate tag"));
            }
        }

        let message = message.ok_or_else(|| {
            syn::Error::new_spanned(name, "missing `message` tag in `#[error(...)]` attribute")
        })?;
        Ok(Self { message, labels, help })
    }
}

/// Binds each named field of `self` to a local of the same name, so the tag expressions can
/// refer to fields directly.
fn bind_fields(name: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named) => {
            let idents = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! {
                #[allow(unused_variables)]
                let #name { #(#idents),* } = self;
            }
        },
        Fields::Unnamed(_) => quote_spanned! { name.span() =>
            compile_error!("`ErrorKind` can only be derived for structs with named fields or unit structs");
        },
        Fields::Unit => TokenStream2::new(),
    }
}

/// The struct that `ErrorKind` is derived for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let attr = item.attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&item.ident, "missing `#[error(...)]` attribute"))?;
        let args = ErrorArgs::from_attribute(attr, &item.ident)?;

        Ok(Self { name: item.ident, fields: item.fields, args })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind = bind_fields(&self.name, &self.fields);
        let message = &self.args.message;
        let labels = match &self.args.labels {
            Some(labels) => quote! { #labels },
            None => quote! { [""] },
        };
        let help = self.args.help.as_ref().map(|help| quote! {
            let report = report.with_help(#help);
        });

        tokens.extend(quote! {
            fn message(&self) -> String {
                #bind
                (#message).to_string()
            }

            fn build_report(
                &self,
                src_id: &'static str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'static str, std::ops::Range<usize>)> {
                #bind
                let offset = spans.first().map_or(0, |span| span.start);
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let text = text.to_string();
                        let label = ariadne::Label::new((src_id, span.clone())).with_color(pw_error::EXPR);
                        if text.is_empty() { label } else { label.with_message(text) }
                    })
                    .collect::<Vec<_>>();

                let report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                report.finish()
            }
        });
    }
}
