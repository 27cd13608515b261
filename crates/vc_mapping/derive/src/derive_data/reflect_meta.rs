use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, LitStr, Path};
use vc_macro_utils::full_path::OptionFP;

use super::TypeAttributes;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    vc_mapping_path: Path,
    attrs: TypeAttributes,
    type_ident: &'a Ident,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_mapping_path", &self.vc_mapping_path.to_token_stream())
            .field("type_ident", &self.type_ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_ident: &'a Ident) -> Self {
        Self {
            vc_mapping_path: crate::path::vc_mapping(),
            attrs,
            type_ident,
        }
    }

    #[inline]
    pub fn vc_mapping_path(&self) -> &Path {
        &self.vc_mapping_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// The ident of the type as written in the source.
    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.type_ident
    }

    /// A `&'static str` expression of the full type path.
    ///
    /// `concat!(module_path!(), "::", "Foo")` unless `type_path` is given.
    pub fn type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => lit.to_token_stream(),
            None => {
                let ident = self.type_ident.to_string();
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #ident)
                }
            }
        }
    }

    /// A `&'static str` expression of the type ident.
    pub fn type_ident(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                let ident = path.rsplit("::").next().unwrap_or(&path);
                LitStr::new(ident, lit.span()).to_token_stream()
            }
            None => {
                let ident = self.type_ident.to_string();
                quote!(#ident)
            }
        }
    }

    /// An `Option<&'static str>` expression of the module path.
    pub fn module_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                match path.rsplit_once("::") {
                    Some((module, _)) => {
                        let module = LitStr::new(module, lit.span());
                        quote!(#OptionFP::Some(#module))
                    }
                    None => quote!(#OptionFP::None),
                }
            }
            None => quote!(#OptionFP::Some(::core::module_path!())),
        }
    }
}
