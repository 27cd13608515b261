//! Reflection-driven mapping between composite records and a JSON-like tree.
//!
//! A struct opts in once with [`derive::Reflect`], which records its ordered
//! field list as static [`TypeInfo`](info::TypeInfo). The [`tree`] module then
//! converts any such value into a [`Node`](tree::Node) and back, recursing into
//! nested composite fields automatically.
//!
//! ```
//! use vc_mapping::{derive::Reflect, tree};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Car {
//!     make: String,
//!     model: String,
//! }
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Driver {
//!     name: String,
//!     age: i32,
//!     car: Car,
//! }
//!
//! let driver = Driver {
//!     name: "John Doe".into(),
//!     age: 30,
//!     car: Car { make: "Tesla".into(), model: "Model S".into() },
//! };
//!
//! let node = tree::to_tree(&driver);
//! assert_eq!(node["car"]["make"], "Tesla");
//!
//! let mut back = Driver::default();
//! tree::from_tree(&node, &mut back).unwrap();
//! assert_eq!(back, driver);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `::vc_mapping`, which must also resolve in the
// inline tests of this crate.
extern crate self as vc_mapping;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;
pub mod tree;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;
pub use vc_mapping_derive as derive;
