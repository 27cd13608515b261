use core::fmt;

use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// LeafKind

/// The scalar shape a leaf type maps to in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.pad("string"),
            Self::Integer => f.pad("integer"),
            Self::Float => f.pad("float"),
            Self::Boolean => f.pad("boolean"),
        }
    }
}

// -----------------------------------------------------------------------------
// LeafInfo

/// A container for compile-time scalar leaf info.
///
/// # Examples
///
/// ```
/// use vc_mapping::info::{LeafKind, Typed};
///
/// let info = u8::type_info().as_leaf().unwrap();
/// assert_eq!(info.leaf_kind(), LeafKind::Integer);
/// assert_eq!(info.type_path(), "u8");
/// ```
#[derive(Clone, Debug)]
pub struct LeafInfo {
    ty: Type,
    kind: LeafKind,
}

impl LeafInfo {
    impl_type_fn!(ty);

    /// Creates a new [`LeafInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>(kind: LeafKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the [`LeafKind`] of this type.
    #[inline]
    pub const fn leaf_kind(&self) -> LeafKind {
        self.kind
    }
}
