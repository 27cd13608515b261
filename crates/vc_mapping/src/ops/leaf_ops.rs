use alloc::borrow::ToOwned;
use core::{error, fmt};

use serde_json::Number;

use crate::Reflect;
use crate::info::LeafKind;
use crate::tree::{Node, NodeKind};

// -----------------------------------------------------------------------------
// LeafValue

/// A borrowed view of a scalar leaf value.
///
/// This is what both the tree serializer and the serde bridge read from a
/// [`Leaf`], so the two produce the same shapes.
#[derive(Clone, Copy, PartialEq)]
pub enum LeafValue<'a> {
    String(&'a str),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
}

impl LeafValue<'_> {
    /// Returns the [`LeafKind`] of this value.
    #[inline]
    pub const fn kind(&self) -> LeafKind {
        match self {
            Self::String(_) => LeafKind::String,
            Self::Bool(_) => LeafKind::Boolean,
            Self::Int(_) | Self::UInt(_) => LeafKind::Integer,
            Self::Float(_) | Self::Float32(_) => LeafKind::Float,
        }
    }

    /// Converts the value into its tree leaf.
    ///
    /// Non-finite floats have no number representation and become `null`.
    pub fn to_node(&self) -> Node {
        match *self {
            Self::String(s) => Node::String(s.to_owned()),
            Self::Bool(b) => Node::Bool(b),
            Self::Int(n) => Node::from(n),
            Self::UInt(n) => Node::from(n),
            Self::Float(n) => Node::from(n),
            Self::Float32(n) => Node::from(n),
        }
    }
}

impl fmt::Debug for LeafValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => fmt::Debug::fmt(s, f),
            Self::Bool(b) => fmt::Debug::fmt(b, f),
            Self::Int(n) => fmt::Debug::fmt(n, f),
            Self::UInt(n) => fmt::Debug::fmt(n, f),
            Self::Float(n) => fmt::Debug::fmt(n, f),
            Self::Float32(n) => fmt::Debug::fmt(n, f),
        }
    }
}

// -----------------------------------------------------------------------------
// LeafError

/// The reason a tree node could not be written into a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafError {
    /// The node variant does not match the leaf kind, e.g. a string for an `i32`.
    Mismatch { expected: LeafKind, found: NodeKind },
    /// The node is a number, but the leaf type cannot hold it, e.g. `300` for an `u8`.
    OutOfRange {
        expected: &'static str,
        found: Number,
    },
}

impl fmt::Display for LeafError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::OutOfRange { expected, found } => {
                write!(f, "number `{found}` is not representable as `{expected}`")
            }
        }
    }
}

impl error::Error for LeafError {}

// -----------------------------------------------------------------------------
// Leaf trait

/// A scalar leaf of the mapping engine.
///
/// Implemented for `String`, `bool`, the integer types up to 64 bits and
/// `f32`/`f64`.
///
/// # Examples
///
/// ```
/// use vc_mapping::ops::{Leaf, LeafError};
/// use vc_mapping::info::LeafKind;
/// use vc_mapping::tree::NodeKind;
///
/// let mut age = 0_i32;
/// age.apply_node(&serde_json::json!(30)).unwrap();
/// assert_eq!(age, 30);
///
/// let err = age.apply_node(&serde_json::json!("thirty")).unwrap_err();
/// assert_eq!(err, LeafError::Mismatch {
///     expected: LeafKind::Integer,
///     found: NodeKind::String,
/// });
/// ```
pub trait Leaf: Reflect {
    /// Returns the [`LeafKind`] this type maps to.
    fn leaf_kind(&self) -> LeafKind;

    /// Returns a borrowed view of the scalar.
    fn leaf_value(&self) -> LeafValue<'_>;

    /// Overwrites `self` with the scalar held by `node`.
    ///
    /// `self` is left untouched on error.
    fn apply_node(&mut self, node: &Node) -> Result<(), LeafError>;

    /// Converts the scalar into its tree leaf.
    #[inline]
    fn to_node(&self) -> Node {
        self.leaf_value().to_node()
    }
}
