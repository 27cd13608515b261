//! Provide the data access interfaces of the mapping engine.
//!
//! The following are subtraits of [`Reflect`]:
//!
//! - [`Struct`]: For composite struct (e.g. `A{ .. }`), positional and named field accessors.
//! - [`Leaf`]: For scalar leaves (e.g. `String`, `i32`), conversion to and from a tree leaf.
//!
//! [`ReflectRef`] and [`ReflectMut`] carry the two kinds, they are obtained from
//! [`Reflect::reflect_ref`] and [`Reflect::reflect_mut`].
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod leaf_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use leaf_ops::{Leaf, LeafError, LeafValue};
pub use struct_ops::{Struct, StructFieldIter};
