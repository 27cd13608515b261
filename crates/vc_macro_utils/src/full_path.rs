//! Fully qualified paths of `core` items for generated code.
//!
//! Generated code must not depend on what the caller has in scope, so
//! `Option` is written as `::core::option::Option` and so on.
//!
//! ```
//! # use quote::quote;
//! use vc_macro_utils::full_path::OptionFP;
//!
//! let tokens = quote!(#OptionFP<u8>);
//! assert_eq!(tokens.to_string(), ":: core :: option :: Option < u8 >");
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => $path:path ;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($path));
            }
        }
    )*};
}

define_full_path! {
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
}
