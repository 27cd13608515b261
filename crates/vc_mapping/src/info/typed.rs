use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Access to a type's static [`TypeInfo`] without an instance.
///
/// For a composite this is the ordered field list the tree mapping walks.
/// The derive implements it. A manual impl keeps the info in a
/// [`NonGenericTypeInfoCell`]:
///
/// ```
/// use vc_mapping::{
///     derive::Reflect,
///     info::{Typed, TypeInfo, StructInfo, NamedField},
///     impls::NonGenericTypeInfoCell
/// };
///
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct Car {
///   make: String,
///   doors: u8,
/// }
///
/// impl Typed for Car {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(
///             StructInfo::new::<Self>(&[
///                 NamedField::new::<String>("make"),
///                 NamedField::new::<u8>("doors"),
///             ])
///         ))
///     }
/// }
///
/// assert_eq!(Car::type_info().as_struct().unwrap().field_len(), 2);
/// ```
///
/// The field order given here must match the indices of the type's
/// [`Struct`](crate::ops::Struct) accessors.
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// [`Typed`] through `&self`, usable on `dyn Reflect`.
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
