use std::sync::OnceLock;

use crate::info::TypeInfo;

/// Lazily built [`TypeInfo`] for a non-generic type, meant for a `static`.
///
/// The closure runs once, on the first call to [`Typed::type_info`]. Every
/// later call, from any thread, returns the same reference.
///
/// ```
/// use vc_mapping::{derive::Reflect, info::*, impls::NonGenericTypeInfoCell};
///
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Point>(&[
///             NamedField::new::<i32>("x"),
///             NamedField::new::<i32>("y"),
///         ])))
///     }
/// }
///
/// assert!(core::ptr::eq(Point::type_info(), Point::type_info()));
/// assert_eq!(Point::type_info().type_ident(), "Point");
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `init` on first use.
    #[inline]
    pub fn get_or_init(&self, init: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(init)
    }
}
