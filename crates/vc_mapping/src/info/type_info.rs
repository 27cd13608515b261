use core::any::{Any, TypeId};
use core::{error, fmt};

use crate::info::{LeafInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// Whether a type maps to a tree object or to a single tree leaf.
///
/// Fixed per type when its [`TypeInfo`] is built, also available from a value
/// through [`Reflect::reflect_kind`](crate::Reflect::reflect_kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A composite, walked field by field.
    Struct,
    /// A scalar.
    Leaf,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Struct => "Struct",
            Self::Leaf => "Leaf",
        })
    }
}

/// A cast to the wrong [`ReflectKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a {} but the type is a {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static description of a mapped type.
///
/// Built once on first access by [`Typed::type_info`] and kept for the
/// process lifetime.
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, info::{Typed, ReflectKind}};
///
/// #[derive(Reflect)]
/// struct Car {
///     make: String,
///     model: String,
/// }
///
/// let info = Car::type_info();
/// assert!(info.is_composite());
/// assert_eq!(info.kind(), ReflectKind::Struct);
///
/// let names: Vec<_> = info.as_struct().unwrap().field_names().collect();
/// assert_eq!(names, ["make", "model"]);
///
/// assert!(!String::type_info().is_composite());
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
#[derive(Debug)]
pub enum TypeInfo {
    Struct(StructInfo),
    Leaf(LeafInfo),
}

macro_rules! impl_cast_fn {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the inner [`", stringify!($info), "`], or an error for the other kind.")]
        #[inline]
        pub fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_fn!(as_struct: Struct => StructInfo);
    impl_cast_fn!(as_leaf: Leaf => LeafInfo);

    #[inline]
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Leaf(info) => info.ty(),
        }
    }

    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Leaf(_) => ReflectKind::Leaf,
        }
    }

    /// Returns `true` if values of this type map to a tree object.
    #[inline]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_ident(&self) -> &'static str {
        self.ty().ident()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::info::{ReflectKind, Typed};

    #[test]
    fn cast_error() {
        let err = String::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.to_string(), "expected a Struct but the type is a Leaf");
    }
}
