//! Serde bridge for reflected values.
//!
//! [`SerializeDriver`] walks the same field descriptors as
//! [`to_tree`](crate::tree::to_tree), so a mapped value can be streamed to a
//! `serde_json` writer without building a tree first. Composite types do not
//! need to implement `serde` traits.

// -----------------------------------------------------------------------------
// Modules

mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use ser::SerializeDriver;
