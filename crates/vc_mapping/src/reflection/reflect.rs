use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// A value the tree mapping can walk.
///
/// Every mapped value is one of two kinds:
///
/// - a composite [`Struct`], mapped to an object with one key per field,
/// - a scalar [`Leaf`], mapped to a string, number or boolean.
///
/// [`reflect_ref`] and [`reflect_mut`] hand out the matching view. The kind
/// never changes for a given type and agrees with its
/// [`TypeInfo`](crate::info::TypeInfo).
///
/// Composites get this through [`#[derive(Reflect)]`](crate::derive::Reflect).
/// A hand-written impl for a composite is three lines:
///
/// ```rust, ignore
/// fn reflect_kind(&self) -> ReflectKind { ReflectKind::Struct }
/// fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
/// fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Struct(self) }
/// ```
///
/// # Downcasting
///
/// ```
/// # use vc_mapping::Reflect;
/// # use core::any::TypeId;
/// let mut age = 30_i32;
/// let value: &mut dyn Reflect = &mut age;
///
/// assert!(value.is::<i32>());
/// assert_eq!(value.ty_id(), TypeId::of::<i32>());
/// *value.downcast_mut::<i32>().unwrap() += 1;
/// assert_eq!(age, 31);
/// ```
///
/// [`Struct`]: crate::ops::Struct
/// [`Leaf`]: crate::ops::Leaf
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Upcast to `&dyn Reflect`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Upcast to `&mut dyn Reflect`.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// The [`TypeId`] of the concrete type, not of a `Box` or reference
    /// around it.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Formats composites the way `#[derive(Debug)]` would, leaves as their
    /// scalar.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            ReflectRef::Leaf(data) => fmt::Debug::fmt(&data.leaf_value(), f),
        }
    }
}

impl dyn Reflect {
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// The three kind accessors of [`Reflect`] for a type of kind `$kind`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
