//! See the [`Reflect`] derive macro.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` records the ordered field list of a struct with named
/// fields and implements the following traits:
///
/// - `TypePath`
/// - `Typed` (a `StructInfo` with one `NamedField` per field, in declaration order)
/// - `Struct` (a `match` arm per field for each accessor)
/// - `Reflect`
///
/// Every field type must itself implement `Reflect` and `Typed`, either as a
/// leaf (`String`, `bool`, integers, floats) or another derived struct.
///
/// Tuple structs, unit structs, enums, unions and generic types are rejected
/// with a compile error.
///
/// ## Renaming Fields
///
/// The descriptor name, and thus the tree key, defaults to the field ident.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Car {
///     #[reflect(rename = "manufacturer")]
///     make: String,
/// }
/// ```
///
/// Two fields ending up with the same name is a compile error.
///
/// ## Disabling Default Implementations
///
/// You can disable specific implementations using attributes; in such cases,
/// you must provide them manually.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(TypePath = false, Typed = false)]
/// struct Foo { /* ... */ }
/// ```
///
/// Available toggles: `TypePath`, `Typed`, `Struct`, `Reflect`.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "my_crate::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// The default path is `module_path!() + "::" + ident`.
///
/// These attributes can only be applied at the type level.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::ReflectStruct::from_ast(&ast) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = impls::impl_struct(&info);

    quote! {
        const _: () = {
            #reflect_impls
        };
    }
    .into()
}
