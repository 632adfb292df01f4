//! End-to-end composition tests: combinators nested through each other,
//! path composition, and the documented error policies.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use veld::prelude::*;
use veld::{all_of, any_of, schema};

#[test]
fn object_array_paths_compose() {
    let user = object()
        .field("name", string().min(1))
        .field("tags", array(string().min(1)));

    let err = user
        .validate(&json!({"name": "Ada", "tags": ["a", "b", ""]}))
        .unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.first().unwrap().path, "tags[2]");
}

#[test]
fn deeply_nested_named_and_indexed_segments() {
    let schema = object().field(
        "user",
        object().field("tags", array(string().min(1))),
    );
    let err = schema
        .validate(&json!({"user": {"tags": ["ok", "also", ""]}}))
        .unwrap_err();
    assert_eq!(err.first().unwrap().path, "user.tags[2]");
}

#[test]
fn root_array_of_objects_paths() {
    let schema = array(object().field("email", string().email()));
    let err = schema
        .validate(&json!([
            {"email": "ok@example.com"},
            {"email": "broken"},
        ]))
        .unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.first().unwrap().path, "[1].email");
}

#[test]
fn record_collects_failures_from_keys_and_values() {
    let scores = record(string(), number().min(0.0));
    let err = scores
        .validate(&json!({"a": 10, "b": -5, "c": "x", "d": -10}))
        .unwrap_err();

    assert_eq!(err.len(), 3);
    assert_eq!(err.at_path("b").count(), 1);
    assert_eq!(err.at_path("c").count(), 1);
    assert_eq!(err.at_path("d").count(), 1);
    assert_eq!(err.at_path("a").count(), 0);
}

#[test]
fn union_returns_first_members_transformation() {
    let flexible = union()
        .member(string().trim())
        .member(string().uppercase());
    assert_eq!(flexible.validate(&json!("  hello  ")), Ok(json!("hello")));
}

#[test]
fn intersection_threads_value_between_members() {
    let name = intersection()
        .member(string().trim())
        .member(string().min(3));
    assert_eq!(name.validate(&json!("  rust  ")), Ok(json!("rust")));

    let err = name.validate(&json!(" hi ")).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(
        err.first().unwrap().message,
        "Intersection validator 2: String must be at least 3 character(s)"
    );
}

#[test]
fn lazy_enables_deep_recursive_schemas() {
    fn tree() -> ObjectValidator {
        object()
            .field("value", number())
            .field("children", array(lazy(|| tree().boxed())).optional())
    }

    let valid = json!({
        "value": 1,
        "children": [
            {"value": 2, "children": [{"value": 3}]},
            {"value": 4},
        ],
    });
    assert!(tree().validate(&valid).is_ok());

    let invalid = json!({
        "value": 1,
        "children": [{"value": 2, "children": [{"value": "x"}]}],
    });
    let err = tree().validate(&invalid).unwrap_err();
    assert_eq!(err.first().unwrap().path, "children[0].children[0].value");
}

#[test]
fn strict_object_reports_every_unknown_field() {
    let schema = object().field("a", number()).strict();
    let err = schema
        .validate(&json!({"a": 1, "b": 2, "c": 3}))
        .unwrap_err();
    assert_eq!(err.len(), 2);
    assert!(err.iter().all(|issue| issue.code == "unknown_field"));
}

#[test]
fn tuple_inside_object() {
    let point = object().field("pos", tuple().item(number()).item(number()));
    let err = point.validate(&json!({"pos": [1, "y"]})).unwrap_err();
    assert_eq!(err.first().unwrap().path, "pos[1]");
}

#[test]
fn macros_compose_with_builders() {
    let user = schema! {
        "id" => any_of![string().uuid(), number().int()],
        "name" => all_of![string().trim(), string().min(1)],
    };
    assert!(user.validate(&json!({"id": 7, "name": " Ada "})).is_ok());
    assert!(user.validate(&json!({"id": true, "name": "Ada"})).is_err());
}

#[test]
fn issues_export_structured_json() {
    let schema = object().field("age", number().min(0.0));
    let err = schema.validate(&json!({"age": -1})).unwrap_err();
    let exported = err.to_json_value();

    let Value::Array(records) = exported else {
        panic!("expected an array of issue records");
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["path"], "age");
    assert_eq!(records[0]["code"], "min");
    assert_eq!(records[0]["received"], -1);
}

#[test]
fn schema_graph_is_shareable_across_threads() {
    use std::sync::Arc;

    let schema = Arc::new(object().field("n", number().int()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = Arc::clone(&schema);
            std::thread::spawn(move || schema.validate(&json!({"n": i})).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
