//! JSON bridge tests

use super::{get, new_object};
use jsproto::{JsFunction, JsValue};
use serde_json::json;

#[test]
fn test_round_trip_through_json() {
    let obj = new_object();
    obj.set("name", "A").ok();
    obj.set("active", false).ok();
    obj.set("score", 1.5).ok();
    obj.set("greet", JsFunction::method(|this, _| this.get("name"))).ok();

    let json = obj.to_json();
    assert_eq!(json, Ok(json!({ "name": "A", "active": false, "score": 1.5 })));

    let rebuilt = json
        .ok()
        .and_then(|j| JsValue::from_json(&j).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();
    assert_eq!(get(&rebuilt, "active"), JsValue::Boolean(false));
    assert_eq!(get(&rebuilt, "score"), JsValue::Number(1.5));
    assert!(!rebuilt.has("greet"));
}
