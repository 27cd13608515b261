use crate::Reflect;
use crate::ops::{Leaf, ReflectMut, Struct};
use crate::tree::{DeError, DeErrorKind, ErrorReporter, Node, NodeKind, TracingReporter};

// -----------------------------------------------------------------------------
// Entry points

/// Writes the content of a tree object into an existing composite value.
///
/// Failures are reported through [`TracingReporter`] before being returned,
/// use [`from_tree_with`] to pick another [`ErrorReporter`].
///
/// See [`from_tree_with`] for the mapping rules.
#[inline]
pub fn from_tree<T: Struct + ?Sized>(node: &Node, target: &mut T) -> Result<(), DeError> {
    from_tree_with(node, target, &mut TracingReporter)
}

/// Writes the content of a tree object into an existing composite value,
/// reporting a failure to `reporter` before returning it.
///
/// # Rules
///
/// - `node` must be an object, otherwise [`DeErrorKind::Shape`].
/// - Fields are visited in declaration order, each must have a key in the
///   object, otherwise [`DeErrorKind::MissingField`].
/// - Composite fields recurse, leaf fields go through [`Leaf::apply_node`].
/// - Keys without a matching field are ignored.
/// - The first failure stops the walk. Fields visited before it have already
///   been overwritten, so the target should be discarded on error.
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, tree::{self, DeErrorKind}};
///
/// #[derive(Reflect, Default)]
/// struct Car {
///     make: String,
///     model: String,
/// }
///
/// let mut car = Car::default();
///
/// let node = serde_json::json!({ "make": "Tesla", "model": "Model S", "year": 2012 });
/// tree::from_tree_with(&node, &mut car, &mut ()).unwrap();
/// assert_eq!(car.model, "Model S");
///
/// let node = serde_json::json!({ "make": "Tesla" });
/// let err = tree::from_tree_with(&node, &mut car, &mut ()).unwrap_err();
/// assert!(matches!(err.kind(), DeErrorKind::MissingField { field: "model", .. }));
/// ```
pub fn from_tree_with<T, R>(node: &Node, target: &mut T, reporter: &mut R) -> Result<(), DeError>
where
    T: Struct + ?Sized,
    R: ErrorReporter + ?Sized,
{
    finish(apply_kind(node, target.reflect_mut()), reporter)
}

/// Writes a tree node into a type-erased value.
///
/// A composite expects an object, a leaf expects the matching leaf node.
/// Failures are reported through [`TracingReporter`].
///
/// ```
/// use vc_mapping::{Reflect, tree};
///
/// let mut age = 0_u32;
/// let target: &mut dyn Reflect = &mut age;
/// tree::reflect_from_tree(&serde_json::json!(30), target).unwrap();
/// assert_eq!(age, 30);
/// ```
#[inline]
pub fn reflect_from_tree(node: &Node, target: &mut dyn Reflect) -> Result<(), DeError> {
    finish(apply_kind(node, target.reflect_mut()), &mut TracingReporter)
}

#[inline]
fn finish<R: ErrorReporter + ?Sized>(
    result: Result<(), DeError>,
    reporter: &mut R,
) -> Result<(), DeError> {
    if let Err(err) = &result {
        reporter.report(err);
    }
    result
}

// -----------------------------------------------------------------------------
// Walk

fn apply_kind(node: &Node, target: ReflectMut<'_>) -> Result<(), DeError> {
    match target {
        ReflectMut::Struct(data) => apply_struct(node, data),
        ReflectMut::Leaf(data) => apply_leaf(node, data, ""),
    }
}

fn apply_leaf(node: &Node, target: &mut dyn Leaf, field: &'static str) -> Result<(), DeError> {
    target
        .apply_node(node)
        .map_err(|err| DeError::new(DeErrorKind::from_leaf(field, err)))
}

fn apply_struct(node: &Node, target: &mut dyn Struct) -> Result<(), DeError> {
    let type_info = target.reflect_type_info();

    let Node::Object(map) = node else {
        return Err(DeError::new(DeErrorKind::Shape {
            expected: type_info.type_path(),
            found: NodeKind::of(node),
        }));
    };

    let Ok(info) = type_info.as_struct() else {
        return Err(DeError::new(DeErrorKind::Shape {
            expected: type_info.type_path(),
            found: NodeKind::Object,
        }));
    };

    let missing = |field: &'static str| {
        DeError::at(
            field,
            DeErrorKind::MissingField {
                field,
                owner: info.type_path(),
            },
        )
    };

    for (index, field) in info.iter().enumerate() {
        let name = field.name();

        let Some(child) = map.get(name) else {
            return Err(missing(name));
        };
        let Some(slot) = target.field_at_mut(index) else {
            return Err(missing(name));
        };

        match slot.reflect_mut() {
            ReflectMut::Struct(data) => {
                tracing::trace!(
                    field = name,
                    owner = info.type_path(),
                    "descending into nested composite"
                );
                apply_struct(child, data).map_err(|err| err.with_parent(name))?;
            }
            ReflectMut::Leaf(data) => {
                apply_leaf(child, data, name).map_err(|err| err.with_parent(name))?;
            }
        }
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use serde_json::json;

    use crate::access::{FieldPath, PathAccess};
    use crate::derive::Reflect;
    use crate::info::LeafKind;
    use crate::tree::{
        DeError, DeErrorKind, ErrorReporter, NodeKind, from_tree_with, reflect_from_tree, to_tree,
    };

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Car {
        make: String,
        model: String,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Job {
        title: String,
        salary: f64,
        car: Car,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: i32,
        job: Job,
    }

    fn john() -> Person {
        Person {
            name: "John Doe".into(),
            age: 30,
            job: Job {
                title: "Software Engineer".into(),
                salary: 100000.0,
                car: Car {
                    make: "Tesla".into(),
                    model: "Model S".into(),
                },
            },
        }
    }

    #[derive(Default)]
    struct Counter {
        calls: usize,
        last: Option<DeError>,
    }

    impl ErrorReporter for Counter {
        fn report(&mut self, error: &DeError) {
            self.calls += 1;
            self.last = Some(error.clone());
        }
    }

    #[test]
    fn person_scenario() {
        let person = john();
        let node = to_tree(&person);

        assert_eq!(
            node,
            json!({
                "name": "John Doe",
                "age": 30,
                "job": {
                    "title": "Software Engineer",
                    "salary": 100000.0,
                    "car": { "make": "Tesla", "model": "Model S" },
                },
            })
        );

        let mut back = Person::default();
        from_tree_with(&node, &mut back, &mut ()).unwrap();
        assert_eq!(back, person);
    }

    #[test]
    fn integral_salary_is_accepted() {
        let node = json!({
            "name": "John Doe",
            "age": 30,
            "job": {
                "title": "Software Engineer",
                "salary": 100000,
                "car": { "make": "Tesla", "model": "Model S" },
            },
        });

        let mut back = Person::default();
        from_tree_with(&node, &mut back, &mut ()).unwrap();
        assert_eq!(back, john());
    }

    #[test]
    fn overwrites_existing_values() {
        let mut target = john();
        target.job.car.make = "Ford".into();
        target.age = 99;

        from_tree_with(&to_tree(&john()), &mut target, &mut ()).unwrap();
        assert_eq!(target, john());
    }

    #[test]
    fn fields_after_failure_are_untouched() {
        let mut target = Person {
            name: "Jane Roe".into(),
            age: 41,
            job: Job {
                title: "Pilot".into(),
                salary: 1.5,
                car: Car {
                    make: "Airbus".into(),
                    model: "A320".into(),
                },
            },
        };
        let before = target.clone();

        let node = json!({
            "name": "John Doe",
            "age": "thirty",
            "job": {
                "title": "Software Engineer",
                "salary": 100000.0,
                "car": { "make": "Tesla", "model": "Model S" },
            },
        });

        let err = from_tree_with(&node, &mut target, &mut ()).unwrap_err();
        assert_eq!(err.path().to_string(), "age");

        // `name` precedes the failure and was written, the rest was never visited.
        assert_eq!(target.name, "John Doe");
        assert_eq!(target.age, before.age);
        assert_eq!(target.job, before.job);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let node = json!({ "make": "Tesla", "model": "Model S", "color": "red" });
        let mut car = Car::default();
        from_tree_with(&node, &mut car, &mut ()).unwrap();
        assert_eq!(car.make, "Tesla");
    }

    #[test]
    fn missing_field() {
        let node = json!({ "name": "John Doe", "job": {} });
        let err = from_tree_with(&node, &mut Person::default(), &mut ()).unwrap_err();

        assert_eq!(err.path().to_string(), "age");
        match err.kind() {
            DeErrorKind::MissingField { field, owner } => {
                assert_eq!(*field, "age");
                assert!(owner.ends_with("::Person"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn type_mismatch() {
        let mut node = to_tree(&john());
        node["age"] = json!("thirty");

        let err = from_tree_with(&node, &mut Person::default(), &mut ()).unwrap_err();
        assert_eq!(err.path().to_string(), "age");
        assert_eq!(
            err.kind(),
            &DeErrorKind::TypeMismatch {
                field: "age",
                expected: LeafKind::Integer,
                found: NodeKind::String,
            }
        );
    }

    #[test]
    fn nested_path() {
        let mut node = to_tree(&john());
        node["job"]["car"]
            .as_object_mut()
            .unwrap()
            .remove("make");

        let err = from_tree_with(&node, &mut Person::default(), &mut ()).unwrap_err();
        assert_eq!(err.path().to_string(), "job.car.make");
        assert!(matches!(
            err.kind(),
            DeErrorKind::MissingField { field: "make", .. }
        ));
        assert!(err.to_string().starts_with("`job.car.make`: missing field `make`"));

        // The reported path leads back to the field of a value.
        let person = john();
        let make = person.access_as::<String>(err.path()).unwrap();
        assert_eq!(make, "Tesla");
    }

    #[test]
    fn nested_shape() {
        let mut node = to_tree(&john());
        node["job"]["car"] = json!("Tesla");

        let err = from_tree_with(&node, &mut Person::default(), &mut ()).unwrap_err();
        assert_eq!(err.path().to_string(), "job.car");
        match err.kind() {
            DeErrorKind::Shape { expected, found } => {
                assert!(expected.ends_with("::Car"));
                assert_eq!(*found, NodeKind::String);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn root_shape() {
        let err = from_tree_with(&json!([1, 2]), &mut Car::default(), &mut ()).unwrap_err();
        assert!(err.path().is_empty());
        assert!(matches!(
            err.kind(),
            DeErrorKind::Shape {
                found: NodeKind::Array,
                ..
            }
        ));
    }

    #[test]
    fn first_failure_wins() {
        // `name` is declared first, so it is the one reported.
        let node = json!({ "name": 1, "age": "x", "job": {} });
        let err = from_tree_with(&node, &mut Person::default(), &mut ()).unwrap_err();
        assert_eq!(err.path(), &FieldPath::parse("name").unwrap());
    }

    #[test]
    fn out_of_range() {
        #[derive(Reflect, Default)]
        struct Pixel {
            level: u8,
        }

        let err = from_tree_with(&json!({ "level": 300 }), &mut Pixel::default(), &mut ())
            .unwrap_err();
        match err.kind() {
            DeErrorKind::OutOfRange {
                field,
                expected,
                found,
            } => {
                assert_eq!(*field, "level");
                assert_eq!(*expected, "u8");
                assert_eq!(found.to_string(), "300");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reporter_called_once() {
        let mut node = to_tree(&john());
        node["job"]["car"]["model"] = json!(false);

        let mut counter = Counter::default();
        let err = from_tree_with(&node, &mut Person::default(), &mut counter).unwrap_err();

        assert_eq!(counter.calls, 1);
        assert_eq!(counter.last.as_ref(), Some(&err));
        assert_eq!(err.path().to_string(), "job.car.model");

        let mut counter = Counter::default();
        from_tree_with(&to_tree(&john()), &mut Person::default(), &mut counter).unwrap();
        assert_eq!(counter.calls, 0);
    }

    #[test]
    fn collecting_reporter() {
        let mut errors: Vec<DeError> = Vec::new();
        let _ = from_tree_with(&json!({}), &mut Car::default(), &mut errors);
        let _ = from_tree_with(&json!(null), &mut Car::default(), &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn leaf_root() {
        let mut flag = false;
        reflect_from_tree(&json!(true), &mut flag).unwrap();
        assert!(flag);

        let err = reflect_from_tree(&json!("yes"), &mut flag).unwrap_err();
        assert!(err.path().is_empty());
        assert_eq!(err.to_string(), "expected boolean, found string");
    }
}
