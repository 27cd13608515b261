use core::{error, fmt};

use serde_json::Number;

use crate::access::FieldPath;
use crate::info::LeafKind;
use crate::ops::LeafError;
use crate::tree::NodeKind;

// -----------------------------------------------------------------------------
// DeErrorKind

/// The reason a tree could not be mapped onto a value.
#[derive(Debug, Clone, PartialEq)]
pub enum DeErrorKind {
    /// A composite value was given a node that is not an object.
    Shape {
        expected: &'static str,
        found: NodeKind,
    },
    /// A field declared by the composite type has no key in the object.
    MissingField {
        field: &'static str,
        owner: &'static str,
    },
    /// A leaf field was given a node of the wrong variant.
    TypeMismatch {
        field: &'static str,
        expected: LeafKind,
        found: NodeKind,
    },
    /// A numeric leaf field was given a number it cannot hold.
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        found: Number,
    },
}

impl DeErrorKind {
    pub(crate) fn from_leaf(field: &'static str, error: LeafError) -> Self {
        match error {
            LeafError::Mismatch { expected, found } => Self::TypeMismatch {
                field,
                expected,
                found,
            },
            LeafError::OutOfRange { expected, found } => Self::OutOfRange {
                field,
                expected,
                found,
            },
        }
    }
}

impl fmt::Display for DeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { expected, found } => {
                write!(f, "expected an object for `{expected}`, found {found}")
            }
            Self::MissingField { field, owner } => {
                write!(f, "missing field `{field}` in `{owner}`")
            }
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => {
                if field.is_empty() {
                    write!(f, "expected {expected}, found {found}")
                } else {
                    write!(f, "expected {expected} for field `{field}`, found {found}")
                }
            }
            Self::OutOfRange {
                field,
                expected,
                found,
            } => {
                write!(f, "number `{found}` is not representable as `{expected}`")?;
                if !field.is_empty() {
                    write!(f, " in field `{field}`")?;
                }
                Ok(())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// DeError

/// A failed mapping from a tree onto a value.
///
/// The [`path`](DeError::path) leads from the root value to the failing
/// field, e.g. `job.car.make`. It is empty when the root itself failed.
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, tree::{self, DeErrorKind}};
///
/// #[derive(Reflect, Default)]
/// struct Car {
///     make: String,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Owner {
///     car: Car,
/// }
///
/// let node = serde_json::json!({ "car": {} });
/// let err = tree::from_tree_with(&node, &mut Owner::default(), &mut ()).unwrap_err();
///
/// assert_eq!(err.path().to_string(), "car.make");
/// assert!(matches!(err.kind(), DeErrorKind::MissingField { field: "make", .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeError {
    path: FieldPath,
    kind: DeErrorKind,
}

impl DeError {
    /// Creates an error for the root value.
    #[inline]
    pub const fn new(kind: DeErrorKind) -> Self {
        Self {
            path: FieldPath::new(),
            kind,
        }
    }

    /// Creates an error for the direct field `field` of the current value.
    #[inline]
    pub fn at(field: &'static str, kind: DeErrorKind) -> Self {
        Self::new(kind).with_parent(field)
    }

    /// Prepends `segment` to the path, used while unwinding out of a nested value.
    #[inline]
    #[must_use]
    pub fn with_parent(mut self, segment: &'static str) -> Self {
        self.path.prepend(segment);
        self
    }

    /// Returns the path from the root value to the failing field.
    #[inline]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns the reason of the failure.
    #[inline]
    pub const fn kind(&self) -> &DeErrorKind {
        &self.kind
    }

    /// Consumes the error, returning the reason.
    #[inline]
    pub fn into_kind(self) -> DeErrorKind {
        self.kind
    }
}

impl fmt::Display for DeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            fmt::Display::fmt(&self.kind, f)
        } else {
            write!(f, "`{}`: {}", self.path, self.kind)
        }
    }
}

impl error::Error for DeError {}

// -----------------------------------------------------------------------------
// JsonError

/// An error returned by [`from_json_str`](crate::tree::from_json_str).
#[derive(Debug)]
pub enum JsonError {
    /// The text is not valid JSON.
    Parse(serde_json::Error),
    /// The JSON is valid, but does not fit the target type.
    Field(DeError),
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid JSON: {err}"),
            Self::Field(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl error::Error for JsonError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Field(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for JsonError {
    #[inline]
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<DeError> for JsonError {
    #[inline]
    fn from(value: DeError) -> Self {
        Self::Field(value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{DeError, DeErrorKind};
    use crate::info::LeafKind;
    use crate::tree::NodeKind;

    #[test]
    fn display() {
        let err = DeError::at(
            "make",
            DeErrorKind::MissingField {
                field: "make",
                owner: "demo::Car",
            },
        )
        .with_parent("car")
        .with_parent("job");

        assert_eq!(
            err.to_string(),
            "`job.car.make`: missing field `make` in `demo::Car`"
        );

        let root = DeError::new(DeErrorKind::Shape {
            expected: "demo::Person",
            found: NodeKind::Array,
        });
        assert_eq!(
            root.to_string(),
            "expected an object for `demo::Person`, found array"
        );

        let leaf = DeError::at(
            "age",
            DeErrorKind::TypeMismatch {
                field: "age",
                expected: LeafKind::Integer,
                found: NodeKind::String,
            },
        );
        assert_eq!(
            leaf.to_string(),
            "`age`: expected integer for field `age`, found string"
        );
    }
}
