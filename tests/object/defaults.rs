//! Default value tests

use super::{get, new_object, send};
use jsproto::{DefaultValue, JsFunction, JsObjectRef, JsValue};

#[test]
fn test_default_value_for_unknown_member() {
    let obj = new_object();
    obj.set_default(5);
    assert_eq!(send(&obj, "undefined", &[]), Ok(JsValue::Number(5.0)));
    assert_eq!(get(&obj, "undefined"), JsValue::Number(5.0));
    assert!(!obj.has("undefined"));
    assert!(matches!(obj.borrow().default_value(), Some(DefaultValue::Value(_))));
}

#[test]
fn test_default_function_for_unknown_member() {
    let obj = new_object();
    obj.set_default_fn(JsFunction::method(|_, _| Ok(JsValue::from(7))));
    assert_eq!(send(&obj, "undefined", &[]), Ok(JsValue::Number(7.0)));

    // Receives the receiver and the missing key
    obj.set("prefix", "missing:").ok();
    obj.set_default_fn(JsFunction::method(|this, args| {
        let prefix = this.get("prefix")?.to_js_string();
        Ok(JsValue::from(prefix + super::arg(args, 0).to_js_string().as_str()))
    }));
    assert_eq!(get(&obj, "color"), JsValue::from("missing:color"));
}

#[test]
fn test_default_applies_after_chain_miss() {
    let parent = new_object();
    parent.set("inherited", 1).ok();
    let child = JsObjectRef::with_prototype(parent.clone());
    child.set_default("fallback");

    assert_eq!(get(&child, "inherited"), JsValue::Number(1.0));
    assert_eq!(get(&child, "nothing"), JsValue::from("fallback"));
    // Defaults below the parent are not visible to it
    assert_eq!(get(&parent, "nothing"), JsValue::Null);
}

#[test]
fn test_prototype_default_answers_child_miss() {
    let parent = new_object();
    parent.set_default(5);
    let child = JsObjectRef::with_prototype(parent.clone());
    let grandchild = JsObjectRef::with_prototype(child.clone());

    assert_eq!(get(&child, "missing"), JsValue::Number(5.0));
    assert_eq!(get(&grandchild, "missing"), JsValue::Number(5.0));
    assert_eq!(send(&grandchild, "missing", &[]), Ok(JsValue::Number(5.0)));
    assert!(!child.has("missing"));

    // The nearest default wins
    child.set_default("near");
    assert_eq!(get(&grandchild, "missing"), JsValue::from("near"));
    assert_eq!(get(&parent, "missing"), JsValue::Number(5.0));

    child.clear_default();
    assert_eq!(get(&grandchild, "missing"), JsValue::Number(5.0));
}

#[test]
fn test_inherited_default_function_sees_receiver() {
    let parent = new_object();
    parent.set("label", "parent").ok();
    parent.set_default_fn(JsFunction::method(|this, args| {
        let label = this.get("label")?.to_js_string();
        Ok(JsValue::from(label + "." + super::arg(args, 0).to_js_string().as_str()))
    }));
    let child = JsObjectRef::with_prototype(parent.clone());
    child.set("label", "child").ok();

    assert_eq!(get(&child, "color"), JsValue::from("child.color"));
    assert_eq!(get(&parent, "color"), JsValue::from("parent.color"));
}

#[test]
fn test_explicit_null_beats_default() {
    let obj = new_object();
    obj.set_default(5);
    obj.set("k", JsValue::Null).ok();
    assert_eq!(get(&obj, "k"), JsValue::Null);

    obj.clear_default();
    assert_eq!(get(&obj, "other"), JsValue::Null);
}
