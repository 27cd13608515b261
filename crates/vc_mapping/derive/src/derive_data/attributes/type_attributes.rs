use syn::{Attribute, Ident, LitBool, LitStr, Token, parse::ParseStream};

use super::TraitImplSwitches;
use crate::REFLECT_ATTRIBUTE_NAME;

/// The `#[reflect(...)]` attributes on the type itself.
///
/// - `type_path = "my_crate::Foo"`: custom `TypePath`.
/// - `TypePath = false`, `Typed = false`, `Reflect = false`, `Struct = false`:
///   skip the implementation, the user provides it.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub impl_switchs: TraitImplSwitches,
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    /// Parses every `#[reflect(...)]` attribute of the type.
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
            input.parse::<Token![=]>()?;

            if ident == "type_path" {
                let lit: LitStr = input.parse()?;
                if self.type_path.is_some() {
                    return Err(syn::Error::new(lit.span(), "duplicate `type_path` attribute"));
                }
                validate_type_path(&lit)?;
                self.type_path = Some(lit);
            } else {
                let switch = match ident.to_string().as_str() {
                    "TypePath" => &mut self.impl_switchs.impl_type_path,
                    "Typed" => &mut self.impl_switchs.impl_typed,
                    "Reflect" => &mut self.impl_switchs.impl_reflect,
                    "Struct" => &mut self.impl_switchs.impl_struct,
                    _ => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!(
                                "unknown attribute `{ident}`, expected one of \
                                 `type_path`, `TypePath`, `Typed`, `Reflect`, `Struct`"
                            ),
                        ));
                    }
                };
                *switch = input.parse::<LitBool>()?.value;
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let path = lit.value();
    if path.is_empty() || path.starts_with("::") || path.split("::").any(str::is_empty) {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must be a non-empty path without leading `::`, e.g. \"my_crate::Foo\"",
        ));
    }
    Ok(())
}
