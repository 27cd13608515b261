//! Mapping between reflected values and a JSON-like tree.
//!
//! The tree model is [`serde_json::Value`], re-exported as [`Node`].
//!
//! - [`to_tree`] turns a composite value into an object node, recursing into
//!   nested composites. It cannot fail.
//! - [`from_tree`] writes an object node into an existing value, validating
//!   every field on the way and stopping at the first failure.
//!
//! A failure is a [`DeError`] carrying the dotted path of the failing field
//! (`job.car.make`) and a [`DeErrorKind`]. Before it is returned, it is handed
//! to an [`ErrorReporter`]; [`from_tree`] uses [`TracingReporter`],
//! [`from_tree_with`] takes any reporter (`&mut ()` silences it).
//!
//! # Examples
//!
//! ```
//! use vc_mapping::{derive::Reflect, tree};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Job {
//!     title: String,
//!     salary: f64,
//! }
//!
//! let job = Job { title: "Software Engineer".into(), salary: 100000.0 };
//!
//! let text = tree::to_json_string(&job, false);
//! assert_eq!(text, r#"{"title":"Software Engineer","salary":100000.0}"#);
//!
//! let mut back = Job::default();
//! tree::from_json_str(&text, &mut back).unwrap();
//! assert_eq!(back, job);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod de;
mod error;
mod kind;
mod report;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::{from_tree, from_tree_with, reflect_from_tree};
pub use error::{DeError, DeErrorKind, JsonError};
pub use kind::NodeKind;
pub use report::{ErrorReporter, TracingReporter};
pub use ser::{reflect_to_tree, to_tree};

use alloc::string::String;

use crate::ops::Struct;

/// A node of the tree.
pub type Node = serde_json::Value;

/// The key-value content of an object [`Node`].
pub type Map = serde_json::Map<String, Node>;

// -----------------------------------------------------------------------------
// JSON text

/// Renders a composite value as JSON text.
///
/// Integers are written without a fraction, floats in their shortest
/// round-trip form.
pub fn to_json_string<T: Struct + ?Sized>(value: &T, pretty: bool) -> String {
    let node = to_tree(value);
    if pretty {
        alloc::format!("{node:#}")
    } else {
        alloc::format!("{node}")
    }
}

/// Parses JSON text and writes it into an existing composite value.
///
/// Mapping failures are reported through [`TracingReporter`].
pub fn from_json_str<T: Struct + ?Sized>(text: &str, target: &mut T) -> Result<(), JsonError> {
    let node: Node = serde_json::from_str(text)?;
    from_tree(&node, target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::derive::Reflect;
    use crate::tree::{JsonError, from_json_str, to_json_string};

    #[derive(Reflect, Default)]
    struct Car {
        make: String,
        model: String,
    }

    #[derive(Reflect, Default)]
    struct Reading {
        value: f64,
    }

    #[test]
    fn pretty_output() {
        let car = Car {
            make: "Tesla".into(),
            model: "Model S".into(),
        };

        let text = to_json_string(&car, true);
        assert_eq!(
            text,
            "{\n  \"make\": \"Tesla\",\n  \"model\": \"Model S\"\n}"
        );
    }

    #[test]
    fn json_errors() {
        let mut car = Car::default();

        let err = from_json_str("{ \"make\": ", &mut car).unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));

        let err = from_json_str(r#"{ "make": "Tesla" }"#, &mut car).unwrap_err();
        assert!(matches!(err, JsonError::Field(_)));
    }

    #[test]
    fn floats_survive_text() {
        let samples = [
            1.947700395895162e-169,
            0.1 + 0.2,
            f64::MIN_POSITIVE,
            5e-324,
            f64::MAX,
            -2.2250738585072014e-308,
            9007199254740992.0,
            123456.789e-300,
        ];

        for value in samples {
            let text = to_json_string(&Reading { value }, false);
            let mut back = Reading::default();
            from_json_str(&text, &mut back).unwrap();
            assert_eq!(back.value.to_bits(), value.to_bits(), "{text}");
        }
    }
}
