use crate::Reflect;
use crate::ops::{ReflectRef, Struct};
use crate::tree::{Map, Node};

/// Converts a composite value into a tree object.
///
/// Fields are visited in declaration order. Composite fields become nested
/// objects, leaf fields become the matching leaf node. The key set of every
/// produced object equals the field names of its type.
///
/// The field list comes from the type's static info, as in [`from_tree`].
/// A declared field whose accessor returns `None` is written as `null` and
/// logged, where [`from_tree`] reports it as a missing field.
///
/// [`from_tree`]: crate::tree::from_tree
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, tree};
///
/// #[derive(Reflect)]
/// struct Car {
///     make: String,
///     model: String,
/// }
///
/// let car = Car { make: "Tesla".into(), model: "Model S".into() };
/// let node = tree::to_tree(&car);
///
/// assert_eq!(node, serde_json::json!({ "make": "Tesla", "model": "Model S" }));
/// ```
#[inline]
pub fn to_tree<T: Struct + ?Sized>(value: &T) -> Node {
    kind_to_tree(value.reflect_ref())
}

/// Converts a type-erased value into a tree node.
///
/// A composite yields an object, a leaf yields its leaf node.
#[inline]
pub fn reflect_to_tree(value: &dyn Reflect) -> Node {
    kind_to_tree(value.reflect_ref())
}

fn kind_to_tree(value: ReflectRef<'_>) -> Node {
    match value {
        ReflectRef::Struct(data) => Node::Object(struct_to_map(data)),
        ReflectRef::Leaf(data) => data.to_node(),
    }
}

fn struct_to_map(value: &dyn Struct) -> Map {
    let mut map = Map::new();

    let Ok(info) = value.reflect_type_info().as_struct() else {
        tracing::error!(
            ty = value.reflect_type_path(),
            "composite value has no struct info, writing an empty object"
        );
        return map;
    };

    for (index, field) in info.iter().enumerate() {
        let node = match value.field_at(index) {
            Some(data) => reflect_to_tree(data),
            None => {
                tracing::error!(
                    field = field.name(),
                    owner = info.type_path(),
                    "declared field has no accessor, writing null"
                );
                Node::Null
            }
        };
        map.insert(field.name().into(), node);
    }

    map
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::json;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::{Struct, StructFieldIter};
    use crate::tree::{DeErrorKind, Node, from_tree_with, reflect_to_tree, to_tree};

    #[derive(Reflect)]
    struct Inner {
        flag: bool,
        ratio: f32,
    }

    #[derive(Reflect)]
    struct Outer {
        id: u64,
        label: String,
        inner: Inner,
    }

    fn sample() -> Outer {
        Outer {
            id: 7,
            label: "seven".into(),
            inner: Inner {
                flag: true,
                ratio: 0.25,
            },
        }
    }

    #[test]
    fn nested_object() {
        let node = to_tree(&sample());
        assert_eq!(
            node,
            json!({
                "id": 7,
                "label": "seven",
                "inner": { "flag": true, "ratio": 0.25 },
            })
        );
    }

    #[test]
    fn key_set_matches_field_names() {
        let node = to_tree(&sample());
        let object = node.as_object().unwrap();

        let info = Outer::type_info().as_struct().unwrap();
        assert_eq!(object.len(), info.field_len());
        for name in info.field_names() {
            assert!(object.contains_key(name), "missing key `{name}`");
        }

        let inner = object["inner"].as_object().unwrap();
        let inner_info = Inner::type_info().as_struct().unwrap();
        assert_eq!(inner.len(), inner_info.field_len());
    }

    #[test]
    fn leaf_root() {
        assert_eq!(reflect_to_tree(&12_i32), json!(12));
        assert_eq!(reflect_to_tree(&String::from("x")), json!("x"));
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
    fn missing_accessor_keeps_declared_keys() {
        let node = to_tree(&Partial { a: 1, b: 2 });
        let keys: Vec<_> = node.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(node["a"], json!(1));
        assert_eq!(node["b"], Node::Null);

        // The same declared field is a missing field in the other direction.
        let mut target = Partial { a: 0, b: 0 };
        let err = from_tree_with(&json!({ "a": 5, "b": 6 }), &mut target, &mut ()).unwrap_err();
        assert!(matches!(err.kind(), DeErrorKind::MissingField { field: "b", .. }));
        assert_eq!(err.path().to_string(), "b");
        assert_eq!((target.a, target.b), (5, 0));
    }
}
