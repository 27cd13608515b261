//! Map plain Rust structs onto a JSON-like tree and back.
//!
//! This crate re-exports the member crates of the workspace. See
//! [`mapping`] for the reflection model and the tree conversions.
//!
//! ```
//! use vc_tree::mapping::{derive::Reflect, tree};
//!
//! #[derive(Reflect, Default)]
//! struct Car {
//!     make: String,
//!     model: String,
//! }
//!
//! let mut car = Car::default();
//! tree::from_json_str(r#"{"make":"Tesla","model":"Model S"}"#, &mut car).unwrap();
//!
//! assert_eq!(car.model, "Model S");
//! assert_eq!(
//!     tree::to_json_string(&car, false),
//!     r#"{"make":"Tesla","model":"Model S"}"#,
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_mapping as mapping;
