use serde_core::ser::{Error, SerializeStruct};
use serde_core::{Serialize, Serializer};

use crate::Reflect;
use crate::ops::{LeafValue, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializer for reflected values.
///
/// Composites are written with `serialize_struct` (named after the type
/// ident) in field declaration order, leaves as the matching primitive. The
/// output is key-for-key the same as [`to_tree`](crate::tree::to_tree).
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, serde::SerializeDriver};
///
/// #[derive(Reflect)]
/// struct Car {
///     make: String,
///     year: u16,
/// }
///
/// let car = Car { make: "Tesla".into(), year: 2012 };
///
/// let output = serde_json::to_string(&SerializeDriver::new(&car)).unwrap();
/// assert_eq!(output, r#"{"make":"Tesla","year":2012}"#);
/// ```
pub struct SerializeDriver<'a> {
    value: &'a dyn Reflect,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a serializer for `value`.
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.reflect_ref() {
            ReflectRef::Struct(struct_value) => {
                StructSerializer { struct_value }.serialize(serializer)
            }
            ReflectRef::Leaf(leaf) => leaf.leaf_value().serialize(serializer),
        }
    }
}

// -----------------------------------------------------------------------------
// StructSerializer

/// A serializer for [`Struct`] values.
struct StructSerializer<'a> {
    struct_value: &'a dyn Struct,
}

impl Serialize for StructSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let type_info = self.struct_value.reflect_type_info();

        let Ok(struct_info) = type_info.as_struct() else {
            return Err(S::Error::custom(format_args!(
                "`{}` has no struct info",
                type_info.type_path()
            )));
        };

        let mut state =
            serializer.serialize_struct(struct_info.type_ident(), struct_info.field_len())?;

        for (index, field) in struct_info.iter().enumerate() {
            let name = field.name();
            if let Some(value) = self.struct_value.field_at(index) {
                state.serialize_field(name, &SerializeDriver::new(value))?;
            } else {
                return Err(S::Error::custom(format_args!(
                    "declared field `{name}` of `{}` has no accessor",
                    struct_info.type_path()
                )));
            }
        }

        state.end()
    }
}

// -----------------------------------------------------------------------------
// Leaf values

impl Serialize for LeafValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Bool(value) => serializer.serialize_bool(value),
            Self::Int(value) => serializer.serialize_i64(value),
            Self::UInt(value) => serializer.serialize_u64(value),
            Self::Float(value) => serializer.serialize_f64(value),
            Self::Float32(value) => serializer.serialize_f32(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::ops::{Struct, StructFieldIter};
    use crate::serde::SerializeDriver;
    use crate::tree::to_tree;

    #[derive(Reflect)]
    struct Car {
        make: String,
        model: String,
    }

    #[derive(Reflect)]
    struct Job {
        title: String,
        salary: f64,
        car: Car,
    }

    fn job() -> Job {
        Job {
            title: "Software Engineer".into(),
            salary: 100000.0,
            car: Car {
                make: "Tesla".into(),
                model: "Model S".into(),
            },
        }
    }

    #[test]
    fn matches_tree_output() {
        let job = job();

        let driver = serde_json::to_string(&SerializeDriver::new(&job)).unwrap();
        let tree = to_tree(&job).to_string();
        assert_eq!(driver, tree);
        assert_eq!(
            driver,
            r#"{"title":"Software Engineer","salary":100000.0,"car":{"make":"Tesla","model":"Model S"}}"#
        );
    }

    #[test]
    fn leaf_root() {
        let output = serde_json::to_string(&SerializeDriver::new(&7_u8)).unwrap();
        assert_eq!(output, "7");
    }

    // Declares `a` and `b`, but only `a` has an accessor.
    #[derive(Reflect)]
    #[reflect(Struct = false)]
    struct Partial {
        a: u8,
        b: u8,
    }

    impl Struct for Partial {
        fn field(&self, name: &str) -> Option<&dyn Reflect> {
            (name == "a").then_some(&self.a as &dyn Reflect)
        }

        fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
            (name == "a").then_some(&mut self.a as &mut dyn Reflect)
        }

        fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
            (index == 0).then_some(&self.a as &dyn Reflect)
        }

        fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
            (index == 0).then_some(&mut self.a as &mut dyn Reflect)
        }

        fn name_at(&self, index: usize) -> Option<&str> {
            (index == 0).then_some("a")
        }

        fn field_len(&self) -> usize {
            1
        }

        fn iter_fields(&self) -> StructFieldIter<'_> {
            StructFieldIter::new(self)
        }
    }

    #[test]
    fn missing_accessor_is_an_error() {
        let value = Partial { a: 1, b: 2 };
        assert_eq!(value.b, 2);

        let err = serde_json::to_string(&SerializeDriver::new(&value)).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("declared field `b` of `vc_mapping::serde::ser::tests::Partial` has no accessor"),
            "{err}"
        );
    }
}
