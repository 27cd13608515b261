use alloc::string::{String, ToString};
use core::fmt;

use crate::Reflect;
use crate::access::{AccessPath, FieldPath, ParseError};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Error

/// An error returned from a failed path access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The path string could not be parsed.
    Parse(ParseError),
    /// The path names the root value, there is nothing to access.
    EmptyPath,
    /// A segment names a field the composite type does not declare.
    MissingField { field: String, owner: &'static str },
    /// A segment tries to step into a leaf value.
    NotStruct { field: String, ty: &'static str },
    /// The value was found but is not of the requested type.
    InvalidDowncast,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => fmt::Display::fmt(err, f),
            Self::EmptyPath => f.write_str("The path is empty"),
            Self::MissingField { field, owner } => {
                write!(f, "The type `{owner}` has no field `{field}`")
            }
            Self::NotStruct { field, ty } => {
                write!(f, "Can't access field `{field}` of the leaf type `{ty}`")
            }
            Self::InvalidDowncast => {
                f.write_str("Can't downcast result of access to the given type")
            }
        }
    }
}

impl core::error::Error for AccessError {}

impl From<ParseError> for AccessError {
    #[inline]
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

// -----------------------------------------------------------------------------
// Walk

impl FieldPath {
    /// Returns a reference to the field this path names, starting at `base`.
    pub fn access<'r>(&self, base: &'r dyn Reflect) -> Result<&'r dyn Reflect, AccessError> {
        if self.is_empty() {
            return Err(AccessError::EmptyPath);
        }

        let mut it = base;
        for segment in self.segments() {
            it = match it.reflect_ref() {
                ReflectRef::Struct(data) => match data.field(segment) {
                    Some(field) => field,
                    None => {
                        return Err(AccessError::MissingField {
                            field: segment.to_string(),
                            owner: data.reflect_type_path(),
                        });
                    }
                },
                ReflectRef::Leaf(data) => {
                    return Err(AccessError::NotStruct {
                        field: segment.to_string(),
                        ty: data.reflect_type_path(),
                    });
                }
            };
        }
        Ok(it)
    }

    /// Returns a mutable reference to the field this path names, starting at `base`.
    pub fn access_mut<'r>(
        &self,
        base: &'r mut dyn Reflect,
    ) -> Result<&'r mut dyn Reflect, AccessError> {
        if self.is_empty() {
            return Err(AccessError::EmptyPath);
        }

        let mut it = base;
        for segment in self.segments() {
            it = match it.reflect_mut() {
                ReflectMut::Struct(data) => {
                    let owner = data.reflect_type_path();
                    match data.field_mut(segment) {
                        Some(field) => field,
                        None => {
                            return Err(AccessError::MissingField {
                                field: segment.to_string(),
                                owner,
                            });
                        }
                    }
                }
                ReflectMut::Leaf(data) => {
                    return Err(AccessError::NotStruct {
                        field: segment.to_string(),
                        ty: data.reflect_type_path(),
                    });
                }
            };
        }
        Ok(it)
    }
}

// -----------------------------------------------------------------------------
// PathAccess

/// Nested field access through a dotted path.
///
/// The path can be a `&str` or a [`FieldPath`], e.g. the path of a
/// [`DeError`](crate::tree::DeError).
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, access::PathAccess};
///
/// #[derive(Reflect)]
/// struct Car {
///     make: String,
/// }
///
/// #[derive(Reflect)]
/// struct Job {
///     salary: f64,
///     car: Car,
/// }
///
/// let mut job = Job { salary: 1.0, car: Car { make: "Tesla".into() } };
///
/// assert_eq!(job.access_as::<String>("car.make").unwrap(), "Tesla");
///
/// *job.access_mut_as::<f64>("salary").unwrap() = 2.0;
/// assert_eq!(job.salary, 2.0);
///
/// assert!(job.access("car.year").is_err());
/// ```
pub trait PathAccess {
    /// Returns a reference to the value specified by `path`.
    fn access<'a, 'p>(&'a self, path: impl AccessPath<'p>)
    -> Result<&'a dyn Reflect, AccessError>;

    /// Returns a mutable reference to the value specified by `path`.
    fn access_mut<'a, 'p>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut dyn Reflect, AccessError>;

    /// Returns a typed reference to the value specified by `path`.
    #[inline]
    fn access_as<'a, 'p, T: Reflect>(
        &'a self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a T, AccessError> {
        self.access(path)?
            .downcast_ref::<T>()
            .ok_or(AccessError::InvalidDowncast)
    }

    /// Returns a mutable typed reference to the value specified by `path`.
    #[inline]
    fn access_mut_as<'a, 'p, T: Reflect>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut T, AccessError> {
        self.access_mut(path)?
            .downcast_mut::<T>()
            .ok_or(AccessError::InvalidDowncast)
    }
}

impl PathAccess for dyn Reflect {
    fn access<'a, 'p>(
        &'a self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a dyn Reflect, AccessError> {
        path.to_field_path()?.access(self)
    }

    fn access_mut<'a, 'p>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut dyn Reflect, AccessError> {
        path.to_field_path()?.access_mut(self)
    }
}

impl<T: Reflect> PathAccess for T {
    #[inline]
    fn access<'a, 'p>(
        &'a self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a dyn Reflect, AccessError> {
        <dyn Reflect as PathAccess>::access(self, path)
    }

    #[inline]
    fn access_mut<'a, 'p>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut dyn Reflect, AccessError> {
        <dyn Reflect as PathAccess>::access_mut(self, path)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::access::{AccessError, FieldPath, PathAccess};
    use crate::derive::Reflect;

    #[derive(Reflect)]
    struct Car {
        make: String,
    }

    #[derive(Reflect)]
    struct Job {
        title: String,
        car: Car,
    }

    fn job() -> Job {
        Job {
            title: "Engineer".into(),
            car: Car {
                make: "Tesla".into(),
            },
        }
    }

    #[test]
    fn nested_access() {
        let job = job();
        assert_eq!(job.access_as::<String>("car.make").unwrap(), "Tesla");

        let path = FieldPath::parse("title").unwrap();
        assert_eq!(job.access_as::<String>(&path).unwrap(), "Engineer");

        let erased: &dyn Reflect = &job;
        assert!(erased.access("car").unwrap().is::<Car>());
    }

    #[test]
    fn access_errors() {
        let mut job = job();

        assert_eq!(job.access("").unwrap_err(), AccessError::EmptyPath);
        assert!(matches!(job.access("car..make"), Err(AccessError::Parse(_))));
        assert!(matches!(
            job.access("car.year"),
            Err(AccessError::MissingField { field, .. }) if field == "year"
        ));
        assert!(matches!(
            job.access_mut("title.len"),
            Err(AccessError::NotStruct { ty: "alloc::string::String", .. })
        ));
        assert_eq!(
            job.access_as::<i32>("title").unwrap_err(),
            AccessError::InvalidDowncast
        );
    }

    #[test]
    fn mutate_through_path() {
        let mut job = job();
        job.access_mut_as::<String>("car.make")
            .unwrap()
            .push_str(" Inc");
        assert_eq!(job.car.make, "Tesla Inc");
    }
}
