//! Provide some utilities for implementing reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`struct_debug`]: Used to implement [`Reflect::reflect_debug`].
//! - [`struct_partial_eq`]: Field-for-field equality of two composites.
//!
//! ## Implemented Leaves
//!
//! - `String`, `bool`
//! - `i8`-`i64`, `isize`, `u8`-`u64`, `usize`
//! - `f32`, `f64`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;
mod leaf;

// -----------------------------------------------------------------------------
// Exports

pub use cell::NonGenericTypeInfoCell;
pub use common::{reflect_partial_eq, struct_debug, struct_partial_eq};
