use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Stable names of a mapped type, used in error messages and by the serde
/// bridge.
///
/// The derive fills this in as `module_path!() + "::" + ident`, or from
/// `#[reflect(type_path = "...")]`.
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect)]
/// struct Car {
///     make: String,
/// }
///
/// assert_eq!(Car::type_ident(), "Car");
/// assert!(Car::type_path().ends_with("::Car"));
/// assert_eq!(String::type_path(), "alloc::string::String");
/// assert_eq!(u8::module_path(), None);
/// ```
pub trait TypePath: 'static {
    /// The full path, e.g. `demo::Car`.
    fn type_path() -> &'static str;

    /// The last segment of the path, e.g. `Car`.
    fn type_ident() -> &'static str;

    /// Everything before the ident, `None` for primitives.
    #[inline]
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// [`TypePath`] through `&self`, usable on `dyn Reflect`.
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;

    fn reflect_type_ident(&self) -> &'static str;

    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        T::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        T::module_path()
    }
}

// -----------------------------------------------------------------------------
// Type

/// Identity of a mapped type, stored in every info container.
///
/// Equality compares the [`TypeId`] only.
///
/// ```
/// # use vc_mapping::info::Type;
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.ident(), "String");
/// assert_eq!(ty.module_path(), Some("alloc::string"));
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    names: [fn() -> &'static str; 2],
    module: fn() -> Option<&'static str>,
}

impl Type {
    /// The identity of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            names: [T::type_path, T::type_ident],
            module: T::module_path,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns `true` if this is the identity of `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.names[0])()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        (self.names[1])()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module)()
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Forwards the [`Type`] accessors of an info container's `ty` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// The identity of the described type.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns `true` if this describes `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// See [`TypePath::type_path`](crate::info::TypePath::type_path).
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// See [`TypePath::type_ident`](crate::info::TypePath::type_ident).
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.$field.ident()
        }

        /// See [`TypePath::module_path`](crate::info::TypePath::module_path).
        #[inline]
        pub fn module_path(&self) -> ::core::option::Option<&'static str> {
            self.$field.module_path()
        }
    };
}

pub(crate) use impl_type_fn;
