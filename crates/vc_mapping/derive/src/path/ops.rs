use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn reflect_mut_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::ops::ReflectMut
    }
}

#[inline]
pub(crate) fn reflect_ref_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::ops::ReflectRef
    }
}

#[inline]
pub(crate) fn struct_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::ops::Struct
    }
}

#[inline]
pub(crate) fn struct_field_iter_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::ops::StructFieldIter
    }
}
