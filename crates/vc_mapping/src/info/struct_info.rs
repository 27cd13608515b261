use alloc::boxed::Box;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info, the ordered field descriptors.
///
/// # Examples
///
/// ```rust
/// use vc_mapping::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     name: String,
/// }
///
/// let info = A::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("name"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Describes `T` with `fields`, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if two fields share a name.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        for (index, field) in fields.iter().enumerate() {
            assert!(
                !fields[..index].iter().any(|f| f.name() == field.name()),
                "duplicate field name `{}` in `{}`",
                field.name(),
                T::type_path(),
            );
        }

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// The descriptor named `name`.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The descriptor at declaration index `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Descriptors in declaration order, the order both tree directions walk.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    /// Declaration index of `name`, a linear scan.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::StructInfo;
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{NamedField, TypeInfo, TypePath, Typed};
    use crate::ops::{Struct, StructFieldIter};
    use crate::tree::{from_tree_with, to_tree};

    #[derive(Reflect)]
    #[reflect(type_path = "fleet::Vehicle")]
    struct Vehicle {
        #[reflect(rename = "manufacturer")]
        make: String,
        wheels: u8,
    }

    #[test]
    fn rename_and_type_path() {
        assert_eq!(Vehicle::type_path(), "fleet::Vehicle");
        assert_eq!(Vehicle::type_ident(), "Vehicle");
        assert_eq!(Vehicle::module_path(), Some("fleet"));

        let info = Vehicle::type_info().as_struct().unwrap();
        assert_eq!(
            info.field_names().collect::<Vec<_>>(),
            ["manufacturer", "wheels"]
        );

        let vehicle = Vehicle {
            make: "Tesla".into(),
            wheels: 4,
        };
        assert_eq!(vehicle.name_at(0), Some("manufacturer"));
        assert!(vehicle.field("make").is_none());
        assert_eq!(
            to_tree(&vehicle),
            json!({ "manufacturer": "Tesla", "wheels": 4 })
        );
    }

    #[test]
    #[should_panic(expected = "duplicate field name `wheels`")]
    fn duplicate_names() {
        let _ = StructInfo::new::<Vehicle>(&[
            NamedField::new::<u8>("wheels"),
            NamedField::new::<u8>("wheels"),
        ]);
    }

    // Hand-written info and accessors listing `y` before `x`.
    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(Typed = false, Struct = false)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Typed for Point {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Struct(StructInfo::new::<Self>(&[
                    NamedField::new::<i32>("y"),
                    NamedField::new::<i32>("x"),
                ]))
            })
        }
    }

    impl Struct for Point {
        fn field(&self, name: &str) -> Option<&dyn Reflect> {
            match name {
                "y" => Some(&self.y),
                "x" => Some(&self.x),
                _ => None,
            }
        }

        fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
            match name {
                "y" => Some(&mut self.y),
                "x" => Some(&mut self.x),
                _ => None,
            }
        }

        fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
            match index {
                0 => Some(&self.y),
                1 => Some(&self.x),
                _ => None,
            }
        }

        fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
            match index {
                0 => Some(&mut self.y),
                1 => Some(&mut self.x),
                _ => None,
            }
        }

        fn name_at(&self, index: usize) -> Option<&str> {
            match index {
                0 => Some("y"),
                1 => Some("x"),
                _ => None,
            }
        }

        fn field_len(&self) -> usize {
            2
        }

        fn iter_fields(&self) -> StructFieldIter<'_> {
            StructFieldIter::new(self)
        }
    }

    #[test]
    fn hand_written_struct() {
        let point = Point { x: 3, y: -4 };
        let node = to_tree(&point);
        assert_eq!(node, json!({ "x": 3, "y": -4 }));

        let keys: Vec<_> = node.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["y", "x"]);

        let mut back = Point::default();
        from_tree_with(&node, &mut back, &mut ()).unwrap();
        assert_eq!(back, point);

        // The first declared field fails first.
        let err = from_tree_with(&json!({}), &mut back, &mut ()).unwrap_err();
        assert_eq!(err.path().to_string(), "y");
    }
}
