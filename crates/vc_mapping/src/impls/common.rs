use core::fmt;

use crate::Reflect;
use crate::ops::{ReflectRef, Struct};

/// A function use for implementing [`Reflect::reflect_debug`] .
///
/// # Example
///
/// ```ignore
/// pub struct Foo { /* ... */ }
///
/// impl Struct for Foo{ /* ... */ }
/// impl Reflect for Foo {
///     // ...
///     fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         struct_debug(self, f)
///     }
/// }
/// ```
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_ident());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        debug.field(dyn_struct.name_at(index).unwrap_or("?"), &field);
    }
    debug.finish()
}

/// Compares two composites field-for-field.
///
/// Returns `false` if the types differ. Leaves are compared by their
/// [`LeafValue`](crate::ops::LeafValue).
///
/// ```
/// use vc_mapping::{derive::Reflect, impls::struct_partial_eq};
///
/// #[derive(Reflect)]
/// struct Car { make: String, doors: u8 }
///
/// let a = Car { make: "Tesla".into(), doors: 4 };
/// let b = Car { make: "Tesla".into(), doors: 4 };
/// let c = Car { make: "Tesla".into(), doors: 2 };
///
/// assert!(struct_partial_eq(&a, &b));
/// assert!(!struct_partial_eq(&a, &c));
/// ```
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Struct) -> bool {
    x.ty_id() == y.ty_id()
        && x.field_len() == y.field_len()
        && x.iter_fields()
            .zip(y.iter_fields())
            .all(|(a, b)| reflect_partial_eq(a, b))
}

/// Compares two reflected values of any kind, see [`struct_partial_eq`].
pub fn reflect_partial_eq(x: &dyn Reflect, y: &dyn Reflect) -> bool {
    match (x.reflect_ref(), y.reflect_ref()) {
        (ReflectRef::Struct(a), ReflectRef::Struct(b)) => struct_partial_eq(a, b),
        (ReflectRef::Leaf(a), ReflectRef::Leaf(b)) => {
            a.ty_id() == b.ty_id() && a.leaf_value() == b.leaf_value()
        }
        _ => false,
    }
}
