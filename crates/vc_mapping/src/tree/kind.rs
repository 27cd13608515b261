use core::fmt;

use crate::tree::Node;

/// The variant of a tree [`Node`], used to name shapes in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    /// Returns the kind of the given node.
    ///
    /// ```
    /// # use vc_mapping::tree::NodeKind;
    /// assert_eq!(NodeKind::of(&serde_json::json!({})), NodeKind::Object);
    /// assert_eq!(NodeKind::of(&serde_json::json!(1.5)), NodeKind::Number);
    /// ```
    #[inline]
    pub const fn of(node: &Node) -> Self {
        match node {
            Node::Null => Self::Null,
            Node::Bool(_) => Self::Boolean,
            Node::Number(_) => Self::Number,
            Node::String(_) => Self::String,
            Node::Array(_) => Self::Array,
            Node::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Boolean => f.pad("boolean"),
            Self::Number => f.pad("number"),
            Self::String => f.pad("string"),
            Self::Array => f.pad("array"),
            Self::Object => f.pad("object"),
        }
    }
}
