//! Accessor synthesis tests

use super::{get, new_object, send};
use jsproto::{AccessorKind, JsValue, PropertyKey};

#[test]
fn test_setter_call_creates_accessor_pair() {
    let obj = new_object();
    assert!(!obj.responds_to("test"));
    assert!(!obj.responds_to("test="));

    assert_eq!(send(&obj, "test=", &[JsValue::from("test")]), Ok(JsValue::from("test")));
    assert!(obj.responds_to("test="));
    assert!(obj.responds_to("test"));
}

#[test]
fn test_indexer_creates_accessor_pair() {
    let obj = new_object();
    obj.set(PropertyKey::symbol("unlikely_key_name"), "test").ok();

    assert!(obj.responds_to("unlikely_key_name"));
    assert_eq!(send(&obj, "unlikely_key_name", &[]), Ok(JsValue::from("test")));
    assert!(obj.responds_to("unlikely_key_name="));
    send(&obj, "unlikely_key_name=", &[JsValue::from("other string")]).ok();
    assert_eq!(send(&obj, "unlikely_key_name", &[]), Ok(JsValue::from("other string")));
    assert_eq!(get(&obj, "unlikely_key_name"), JsValue::from("other string"));
}

#[test]
fn test_accessor_table_entries() {
    let obj = new_object();
    obj.set("name", "A").ok();

    let borrowed = obj.borrow();
    let getter = borrowed.store().accessor("name").cloned();
    let setter = borrowed.store().accessor("name=").cloned();
    assert_eq!(getter.map(|a| a.kind), Some(AccessorKind::Getter));
    assert_eq!(
        setter.map(|a| (a.key, a.kind)),
        Some((PropertyKey::from("name"), AccessorKind::Setter))
    );
    assert_eq!(borrowed.store().accessor_names().len(), 2);
}

#[test]
fn test_reassignment_does_not_duplicate_accessors() {
    let obj = new_object();
    for i in 0..3 {
        send(&obj, "counter=", &[JsValue::from(i)]).ok();
    }
    assert_eq!(get(&obj, "counter"), JsValue::Number(2.0));
    assert_eq!(obj.borrow().store().accessor_names().len(), 2);
}

#[test]
fn test_delete_removes_accessors() {
    let obj = new_object();
    send(&obj, "test=", &[JsValue::from("test")]).ok();
    assert_eq!(obj.delete(PropertyKey::symbol("test")), Some(JsValue::from("test")));

    assert!(!obj.responds_to("test"));
    assert!(!obj.responds_to("test="));
    assert!(!obj.has("test"));
    assert_eq!(get(&obj, "test"), JsValue::Null);
}

#[test]
fn test_delete_unknown_key_is_noop() {
    let obj = new_object();
    obj.set("kept", 1).ok();
    assert_eq!(obj.delete("never_set"), None);
    assert_eq!(obj.delete("prototype"), None);
    assert!(obj.prototype().is_some());
    assert_eq!(obj.own_keys(), vec![PropertyKey::from("kept")]);
}

#[test]
fn test_unknown_getter_returns_null() {
    let obj = new_object();
    assert_eq!(send(&obj, "undefined", &[]), Ok(JsValue::Null));
    // Reading does not synthesize anything
    assert!(!obj.responds_to("undefined"));
    assert!(obj.is_empty());
}

#[test]
fn test_setter_works_when_a_key_shares_its_name() {
    let obj = new_object();
    obj.set("a=", 1).ok();
    obj.set("a", 2).ok();

    assert_eq!(send(&obj, "a=", &[JsValue::from(3)]), Ok(JsValue::Number(3.0)));
    assert_eq!(get(&obj, "a"), JsValue::Number(3.0));
    // The other key is untouched and still reachable by index
    assert_eq!(get(&obj, "a="), JsValue::Number(1.0));

    obj.delete("a");
    assert_eq!(send(&obj, "a=", &[]), Ok(JsValue::Number(1.0)));
}
