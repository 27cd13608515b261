use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn named_field_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::info::NamedField
    }
}

#[inline]
pub(crate) fn reflect_kind_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::info::ReflectKind
    }
}

#[inline]
pub(crate) fn struct_info_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::info::StructInfo
    }
}

#[inline]
pub(crate) fn type_info_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::info::TypeInfo
    }
}

#[inline]
pub(crate) fn type_path_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::info::TypePath
    }
}

#[inline]
pub(crate) fn typed_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::info::Typed
    }
}
