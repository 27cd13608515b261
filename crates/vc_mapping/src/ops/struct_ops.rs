use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// Field accessors of a composite value.
///
/// Index `i` addresses the `i`-th [`NamedField`] of the type's
/// [`StructInfo`]. The tree mapping only uses the positional accessors, the
/// name-based ones serve [`PathAccess`](crate::access::PathAccess).
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) with one
/// `match` arm per field, so every descriptor has an accessor.
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Car {
///     make: String,
///     doors: u8,
/// }
///
/// let mut car = Car { make: "Tesla".into(), doors: 4 };
/// let value: &mut dyn Struct = &mut car;
///
/// assert_eq!(value.field_len(), 2);
/// assert_eq!(value.name_at(1), Some("doors"));
/// *value.field_mut_as::<u8>("doors").unwrap() = 2;
/// assert_eq!(value.field_as::<u8>("doors"), Some(&2));
/// ```
///
/// [`StructInfo`]: crate::info::StructInfo
/// [`NamedField`]: crate::info::NamedField
pub trait Struct: Reflect {
    /// The field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// The field named `name`, mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// The field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// The field at declaration index `index`, mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// The descriptor name at `index`, which is also the tree key.
    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;

    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// [`Struct::field`] downcast to `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref()
    }

    /// [`Struct::field_mut`] downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name)?.downcast_mut()
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// Field values of a composite in declaration order.
///
/// ```
/// use vc_mapping::{derive::Reflect, ops::StructFieldIter};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point = Point { x: 1, y: 2 };
/// let xs: Vec<i32> = StructFieldIter::new(&point)
///     .filter_map(|v| v.downcast_ref::<i32>().copied())
///     .collect();
/// assert_eq!(xs, [1, 2]);
/// ```
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    next: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        Self { value, next: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let field = self.value.field_at(self.next)?;
        self.next += 1;
        Some(field)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.value.field_len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
