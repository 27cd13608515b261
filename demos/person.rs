//! Maps a `Person` onto JSON text and back.
//!
//! Run with `RUST_LOG=vc_mapping=trace` to see the descent into nested
//! composites, and the reported error for the malformed document.

use tracing_subscriber::EnvFilter;
use vc_tree::mapping::derive::Reflect;
use vc_tree::mapping::tree;

#[derive(Reflect, Default, Debug)]
struct Car {
    make: String,
    model: String,
}

#[derive(Reflect, Default, Debug)]
struct Job {
    title: String,
    salary: f64,
    car: Car,
}

#[derive(Reflect, Default, Debug)]
struct Person {
    name: String,
    age: i32,
    job: Job,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let person = Person {
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
    };
    println!("{person:#?}");

    let text = tree::to_json_string(&person, true);
    println!("{text}");

    let mut restored = Person::default();
    match tree::from_json_str(&text, &mut restored) {
        Ok(()) => println!("{restored:#?}"),
        Err(err) => println!("error: {err}"),
    }

    let broken = r#"{"name":"Jane","age":41,"job":{"title":"Pilot","salary":1.0,"car":{"model":"A320"}}}"#;
    let mut partial = Person::default();
    if let Err(err) = tree::from_json_str(broken, &mut partial) {
        println!("error: {err}");
    }
}
