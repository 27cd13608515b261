use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// A field descriptor: the field name and the field's type information.
///
/// Descriptors belong to the owning type's static [`StructInfo`], never to
/// instances. Reading and writing the field goes through the owning type's
/// [`Struct`] accessors at the same index.
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Job {
///     salary: f64,
/// }
///
/// let info = Job::type_info().as_struct().unwrap();
/// let salary = info.field_at(0).unwrap();
///
/// assert!(salary.type_is::<f64>());
/// assert_eq!(salary.name(), "salary");
/// assert!(!salary.is_composite());
/// ```
///
/// [`StructInfo`]: crate::info::StructInfo
/// [`Struct`]: crate::ops::Struct
#[derive(Clone)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // Resolved lazily, the field type's info may not be built yet.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// A field called `name` holding a `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// The tree key of this field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Info of the field's value type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns `true` if the field's value type is itself a composite type.
    #[inline]
    pub fn is_composite(&self) -> bool {
        self.type_info().is_composite()
    }
}

impl fmt::Debug for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedField")
            .field("name", &self.name)
            .field("type_path", &self.type_info().type_path())
            .finish()
    }
}
