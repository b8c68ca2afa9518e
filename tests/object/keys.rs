//! Indifferent key access tests

use super::{get, new_object};
use jsproto::{JsObjectRef, JsValue, PropertyKey};

#[test]
fn test_string_and_symbol_keys_are_identical() {
    let obj = new_object();
    obj.set("test", 5).ok();
    assert_eq!(get(&obj, "test"), JsValue::Number(5.0));
    assert_eq!(obj.get(PropertyKey::symbol("test")), Ok(JsValue::Number(5.0)));

    obj.set(PropertyKey::symbol("test"), false).ok();
    assert_eq!(get(&obj, "test"), JsValue::Boolean(false));
    assert_eq!(obj.get(String::from("test")), Ok(JsValue::Boolean(false)));

    obj.set(String::from("test"), JsValue::Null).ok();
    assert_eq!(obj.get(PropertyKey::symbol("test")), Ok(JsValue::Null));
    assert_eq!(obj.len(), 1);
}

#[test]
fn test_indexer_overwrite() {
    let obj = new_object();
    assert_eq!(get(&obj, "test"), JsValue::Null);
    for value in [
        JsValue::from(5),
        JsValue::from("test"),
        JsValue::Boolean(false),
        JsValue::Null,
    ] {
        obj.set("test", value.clone()).ok();
        assert_eq!(get(&obj, "test"), value);
    }
}

#[test]
fn test_keys_from_values() {
    let obj = new_object();
    let key = PropertyKey::from_value(&JsValue::Number(1.0));
    assert_eq!(key, Ok(PropertyKey::from("1")));
    if let Ok(key) = key {
        obj.set(key, "one").ok();
    }
    assert_eq!(get(&obj, "1"), JsValue::from("one"));

    let bad = PropertyKey::from_value(&JsValue::Object(JsObjectRef::new()));
    assert!(bad.is_err());
}

#[test]
fn test_own_keys_insertion_order() {
    let obj = new_object();
    obj.set("b", 1).ok();
    obj.set("a", 2).ok();
    obj.set("c", 3).ok();
    obj.set("a", 4).ok();
    let keys: Vec<String> = obj.own_keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}
