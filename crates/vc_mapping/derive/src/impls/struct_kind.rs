use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use vc_macro_utils::full_path::OptionFP;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::{FieldAccessors, ReflectStruct};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let switches = &meta.attrs().impl_switchs;

    // trait: TypePath
    let type_path_trait_tokens = if switches.impl_type_path {
        impl_trait_type_path(meta)
    } else {
        crate::utils::empty()
    };

    // trait: Typed
    let typed_trait_tokens = if switches.impl_typed {
        impl_trait_typed(meta, info.to_info_tokens())
    } else {
        crate::utils::empty()
    };

    // trait: Struct
    let struct_trait_tokens = if switches.impl_struct {
        impl_trait_struct(info)
    } else {
        crate::utils::empty()
    };

    // trait: Reflect
    let reflect_trait_tokens = if switches.impl_reflect {
        impl_trait_reflect(meta, quote!(Struct))
    } else {
        crate::utils::empty()
    };

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let vc_mapping_path = info.meta().vc_mapping_path();
    let struct_ = crate::path::struct_(vc_mapping_path);
    let reflect_ = crate::path::reflect_(vc_mapping_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vc_mapping_path);
    let option_ = OptionFP.to_token_stream();

    let FieldAccessors {
        fields_ref,
        fields_mut,
        field_names,
        field_indices,
        field_count,
    } = FieldAccessors::new(info);

    let real_ident = info.meta().real_ident();

    quote! {
        impl #struct_ for #real_ident {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
