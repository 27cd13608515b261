use alloc::string::String;

use serde_json::Number;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{LeafInfo, LeafKind, TypeInfo, TypePath, Typed};
use crate::ops::{Leaf, LeafError, LeafValue};
use crate::reflection::impl_reflect_cast_fn;
use crate::tree::{Node, NodeKind};

// -----------------------------------------------------------------------------
// Helpers

#[inline]
fn mismatch(expected: LeafKind, node: &Node) -> LeafError {
    LeafError::Mismatch {
        expected,
        found: NodeKind::of(node),
    }
}

#[inline]
fn out_of_range<T: TypePath>(number: &Number) -> LeafError {
    LeafError::OutOfRange {
        expected: T::type_path(),
        found: number.clone(),
    }
}

#[inline]
fn expect_number(node: &Node, expected: LeafKind) -> Result<&Number, LeafError> {
    match node {
        Node::Number(number) => Ok(number),
        _ => Err(mismatch(expected, node)),
    }
}

// -----------------------------------------------------------------------------
// Shared impls

macro_rules! impl_leaf_base {
    ($ty:ty, $kind:ident, $path:expr, $ident:expr, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Leaf(LeafInfo::new::<Self>(LeafKind::$kind)))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Leaf);
        }
    };
    ($ty:ident, $kind:ident) => {
        impl_leaf_base!($ty, $kind, stringify!($ty), stringify!($ty), None);
    };
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_signed_leaf {
    ($($ty:ident),*) => {$(
        impl_leaf_base!($ty, Integer);

        impl Leaf for $ty {
            #[inline]
            fn leaf_kind(&self) -> LeafKind {
                LeafKind::Integer
            }

            #[inline]
            fn leaf_value(&self) -> LeafValue<'_> {
                LeafValue::Int(*self as i64)
            }

            fn apply_node(&mut self, node: &Node) -> Result<(), LeafError> {
                let number = expect_number(node, LeafKind::Integer)?;
                *self = number
                    .as_i64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .ok_or_else(|| out_of_range::<Self>(number))?;
                Ok(())
            }
        }
    )*};
}

macro_rules! impl_unsigned_leaf {
    ($($ty:ident),*) => {$(
        impl_leaf_base!($ty, Integer);

        impl Leaf for $ty {
            #[inline]
            fn leaf_kind(&self) -> LeafKind {
                LeafKind::Integer
            }

            #[inline]
            fn leaf_value(&self) -> LeafValue<'_> {
                LeafValue::UInt(*self as u64)
            }

            fn apply_node(&mut self, node: &Node) -> Result<(), LeafError> {
                let number = expect_number(node, LeafKind::Integer)?;
                *self = number
                    .as_u64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .ok_or_else(|| out_of_range::<Self>(number))?;
                Ok(())
            }
        }
    )*};
}

impl_signed_leaf!(i8, i16, i32, i64, isize);
impl_unsigned_leaf!(u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

impl_leaf_base!(f64, Float);

impl Leaf for f64 {
    #[inline]
    fn leaf_kind(&self) -> LeafKind {
        LeafKind::Float
    }

    #[inline]
    fn leaf_value(&self) -> LeafValue<'_> {
        LeafValue::Float(*self)
    }

    fn apply_node(&mut self, node: &Node) -> Result<(), LeafError> {
        let number = expect_number(node, LeafKind::Float)?;
        *self = number
            .as_f64()
            .ok_or_else(|| out_of_range::<Self>(number))?;
        Ok(())
    }
}

impl_leaf_base!(f32, Float);

impl Leaf for f32 {
    #[inline]
    fn leaf_kind(&self) -> LeafKind {
        LeafKind::Float
    }

    #[inline]
    fn leaf_value(&self) -> LeafValue<'_> {
        LeafValue::Float32(*self)
    }

    fn apply_node(&mut self, node: &Node) -> Result<(), LeafError> {
        let number = expect_number(node, LeafKind::Float)?;
        *self = number
            .as_f64()
            .map(|n| n as f32)
            .filter(|n| n.is_finite())
            .ok_or_else(|| out_of_range::<Self>(number))?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Boolean

impl_leaf_base!(bool, Boolean);

impl Leaf for bool {
    #[inline]
    fn leaf_kind(&self) -> LeafKind {
        LeafKind::Boolean
    }

    #[inline]
    fn leaf_value(&self) -> LeafValue<'_> {
        LeafValue::Bool(*self)
    }

    fn apply_node(&mut self, node: &Node) -> Result<(), LeafError> {
        match node {
            Node::Bool(value) => {
                *self = *value;
                Ok(())
            }
            _ => Err(mismatch(LeafKind::Boolean, node)),
        }
    }
}

// -----------------------------------------------------------------------------
// String

impl_leaf_base!(
    String,
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string")
);

impl Leaf for String {
    #[inline]
    fn leaf_kind(&self) -> LeafKind {
        LeafKind::String
    }

    #[inline]
    fn leaf_value(&self) -> LeafValue<'_> {
        LeafValue::String(self)
    }

    fn apply_node(&mut self, node: &Node) -> Result<(), LeafError> {
        match node {
            Node::String(value) => {
                self.clone_from(value);
                Ok(())
            }
            _ => Err(mismatch(LeafKind::String, node)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::info::{LeafKind, TypePath, Typed};
    use crate::ops::{Leaf, LeafError};
    use crate::tree::NodeKind;

    #[test]
    fn type_path() {
        assert_eq!(<i32 as TypePath>::type_path(), "i32");
        assert_eq!(<i32 as TypePath>::module_path(), None);
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::type_ident(), "String");
        assert_eq!(String::module_path(), Some("alloc::string"));
    }

    #[test]
    fn leaf_info() {
        let info = f64::type_info().as_leaf().unwrap();
        assert_eq!(info.leaf_kind(), LeafKind::Float);
        assert!(info.type_is::<f64>());
        assert!(u16::type_info().as_struct().is_err());
    }

    #[test]
    fn integer_range() {
        let mut x = 0_u8;
        x.apply_node(&json!(255)).unwrap();
        assert_eq!(x, 255);

        let err = x.apply_node(&json!(256)).unwrap_err();
        assert!(matches!(err, LeafError::OutOfRange { expected: "u8", .. }));
        assert_eq!(err.to_string(), "number `256` is not representable as `u8`");

        assert!(x.apply_node(&json!(-1)).is_err());
        assert!(x.apply_node(&json!(1.5)).is_err());
        // untouched on error
        assert_eq!(x, 255);

        let mut y = 0_i64;
        y.apply_node(&json!(-42)).unwrap();
        assert_eq!(y, -42);
        assert!(y.apply_node(&json!(u64::MAX)).is_err());
    }

    #[test]
    fn float_accepts_integral_numbers() {
        let mut salary = 0.0_f64;
        salary.apply_node(&json!(100000)).unwrap();
        assert_eq!(salary, 100000.0);

        let mut ratio = 0.0_f32;
        ratio.apply_node(&json!(0.5)).unwrap();
        assert_eq!(ratio, 0.5);
        assert!(ratio.apply_node(&json!(1e300)).is_err());
    }

    #[test]
    fn mismatch() {
        let mut name = String::from("keep");
        let err = name.apply_node(&json!(7)).unwrap_err();
        assert_eq!(
            err,
            LeafError::Mismatch {
                expected: LeafKind::String,
                found: NodeKind::Number,
            }
        );
        assert_eq!(err.to_string(), "expected string, found number");
        assert_eq!(name, "keep");

        let mut flag = false;
        assert!(flag.apply_node(&json!(null)).is_err());
        flag.apply_node(&json!(true)).unwrap();
        assert!(flag);
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert_eq!(f64::NAN.to_node(), json!(null));
        assert_eq!(f64::INFINITY.to_node(), json!(null));
        assert_eq!(1.5_f64.to_node(), json!(1.5));
    }
}
