//! Nested field access through dotted paths.
//!
//! - [`FieldPath`]: a parsed path such as `job.car.make`, also carried by
//!   [`DeError`](crate::tree::DeError).
//! - [`PathAccess`]: resolves a path against a value.

mod path;
mod path_access;

pub use path::{AccessPath, FieldPath, ParseError};
pub use path_access::{AccessError, PathAccess};
