use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Leaf, Struct};

/// An immutable enumeration of "kinds" of a reflected value.
///
/// Each variant contains a trait object with methods specific to a kind of type.
///
/// A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
///
/// [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Leaf(&'a dyn Leaf),
}

/// A mutable enumeration of "kinds" of a reflected value.
///
/// A [`ReflectMut`] is obtained via [`Reflect::reflect_mut`].
///
/// [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Leaf(&'a mut dyn Leaf),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [kind](ReflectKind) of this value.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Leaf(_) => ReflectKind::Leaf,
        }
    }

    /// Try cast to a [`Struct`].
    #[inline]
    pub fn as_struct(self) -> Result<&'a dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            Self::Leaf(_) => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: ReflectKind::Leaf,
            }),
        }
    }

    /// Try cast to a [`Leaf`].
    #[inline]
    pub fn as_leaf(self) -> Result<&'a dyn Leaf, ReflectKindError> {
        match self {
            Self::Leaf(value) => Ok(value),
            Self::Struct(_) => Err(ReflectKindError {
                expected: ReflectKind::Leaf,
                received: ReflectKind::Struct,
            }),
        }
    }
}

impl<'a> ReflectMut<'a> {
    /// Returns the [kind](ReflectKind) of this value.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Leaf(_) => ReflectKind::Leaf,
        }
    }

    /// Try cast to a [`Struct`].
    #[inline]
    pub fn as_struct(self) -> Result<&'a mut dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            Self::Leaf(_) => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: ReflectKind::Leaf,
            }),
        }
    }

    /// Try cast to a [`Leaf`].
    #[inline]
    pub fn as_leaf(self) -> Result<&'a mut dyn Leaf, ReflectKindError> {
        match self {
            Self::Leaf(value) => Ok(value),
            Self::Struct(_) => Err(ReflectKindError {
                expected: ReflectKind::Leaf,
                received: ReflectKind::Struct,
            }),
        }
    }
}
