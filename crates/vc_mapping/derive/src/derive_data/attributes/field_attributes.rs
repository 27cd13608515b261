use syn::{Attribute, Ident, LitStr, Token, parse::ParseStream};

use crate::REFLECT_ATTRIBUTE_NAME;

/// The `#[reflect(...)]` attributes on a field.
///
/// - `rename = "key"`: the descriptor name, and thus the tree key.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    /// Parses every `#[reflect(...)]` attribute of the field.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut val = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_args_with(|input: ParseStream| val.parse_inner_stream(input))?;
            }
        }
        Ok(val)
    }

    fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            if ident != "rename" {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown field attribute `{ident}`, expected `rename`"),
                ));
            }

            input.parse::<Token![=]>()?;
            let lit: LitStr = input.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "field name cannot be empty"));
            }
            if self.rename.is_some() {
                return Err(syn::Error::new(lit.span(), "duplicate `rename` attribute"));
            }
            self.rename = Some(lit);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }
}
