use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let trait_type_path_ = crate::path::type_path_(meta.vc_mapping_path());

    let real_ident = meta.real_ident();
    let type_path = meta.type_path();
    let type_ident = meta.type_ident();
    let module_path = meta.module_path();

    quote! {
        impl #trait_type_path_ for #real_ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
