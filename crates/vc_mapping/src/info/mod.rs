//! Provide compile-time type infomation implementations.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_ident`](TypePath::type_ident): The name without module path.
//!     - [`module_path`](TypePath::module_path): optional module path(e.g. "vc_mapping::info").
//!
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//!
//! - [`Type`]: A struct contains a `TypeId` and the `TypePath` function pointers of a single type.
//!
//! - [`TypeInfo`]: A enum representing compile-time type infomations, the inner is one of following:
//!     - [`StructInfo`]: For composite struct(e.g. `A{..}`) infomation, including the ordered field descriptors.
//!     - [`LeafInfo`]: For scalar leaf types(e.g. `String`, `i32`), including its [`LeafKind`].
//!
//! - [`NamedField`]: A field descriptor, the field name and the field's type info.
//!
//! - Kind:
//!     - [`ReflectKind`]: `Struct` or `Leaf`, the composite-type predicate.
//!     - [`LeafKind`]: `String`, `Integer`, `Float` or `Boolean`.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data without an instance.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod leaf_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use leaf_info::{LeafInfo, LeafKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
