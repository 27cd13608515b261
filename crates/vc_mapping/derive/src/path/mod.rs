//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vc_mapping` structure is modified.
//!
//! The only special feature is the path of vc_mapping itself,
//! See [`vc_mapping`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_mapping` crate.
///
/// 1. For crates that depend on `vc_mapping`, `::vc_mapping` is returned here.
/// 2. For crates that depend on `vc_tree`, `::vc_tree::mapping` is returned here.
/// 3. For crates that depend on `vc`, `::vc::mapping` is returned here.
/// 4. For other situations, `::vc_mapping` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is obtained once per derive and passed around.
pub(crate) fn vc_mapping() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_mapping"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn reflect_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_mapping_path::Reflect
    }
}
