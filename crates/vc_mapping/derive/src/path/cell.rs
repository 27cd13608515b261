use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn non_generic_type_info_cell_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::impls::NonGenericTypeInfoCell
    }
}
