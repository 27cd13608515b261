use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, reflect_kind_token: TokenStream) -> TokenStream {
    let vc_mapping_path = meta.vc_mapping_path();

    let reflect_ = crate::path::reflect_(vc_mapping_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_mapping_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_mapping_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_mapping_path);

    let real_ident = meta.real_ident();

    quote! {
        impl #reflect_ for #real_ident {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }
        }
    }
}
