//! JSON bridge
//!
//! Converts between `JsValue` and `serde_json::Value`. Only own properties are
//! written, in insertion order; functions are skipped the way
//! `JSON.stringify` skips them.

use serde_json::{Map, Number, Value};

use crate::error::JsError;
use crate::object::JsObjectRef;
use crate::prelude::*;
use crate::value::{JsString, JsValue, PropertyKey};

impl JsValue {
    /// Serialize to JSON. A top-level function becomes `null`; circular
    /// object graphs are a `TypeError`.
    pub fn to_json(&self) -> Result<Value, JsError> {
        let mut visiting = FxHashSet::default();
        to_json_inner(self, &mut visiting)
    }

    /// Build a value from JSON. Objects get the shared root as prototype;
    /// arrays become objects keyed by index with a `length`.
    pub fn from_json(json: &Value) -> Result<JsValue, JsError> {
        Ok(match json {
            Value::Null => JsValue::Null,
            Value::Bool(b) => JsValue::Boolean(*b),
            Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => JsValue::String(JsString::from(s.as_str())),
            Value::Array(items) => {
                let obj = JsObjectRef::new();
                for (index, item) in items.iter().enumerate() {
                    obj.set(index.to_string(), JsValue::from_json(item)?)?;
                }
                obj.set("length", JsValue::Number(items.len() as f64))?;
                JsValue::Object(obj)
            }
            Value::Object(map) => JsValue::Object(JsObjectRef::from_json_map(map)?),
        })
    }
}

impl JsObjectRef {
    /// Own properties as a JSON object
    pub fn to_json(&self) -> Result<Value, JsError> {
        JsValue::Object(self.clone()).to_json()
    }

    /// A `prototype` member relinks the new object's prototype like any
    /// other `set("prototype", ..)` would.
    pub fn from_json_map(map: &Map<String, Value>) -> Result<JsObjectRef, JsError> {
        let obj = JsObjectRef::new();
        for (key, value) in map {
            obj.set(PropertyKey::from(key.as_str()), JsValue::from_json(value)?)?;
        }
        Ok(obj)
    }
}

fn number_to_json(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

fn to_json_inner(value: &JsValue, visiting: &mut FxHashSet<usize>) -> Result<Value, JsError> {
    Ok(match value {
        JsValue::Null | JsValue::Function(_) => Value::Null,
        JsValue::Boolean(b) => Value::Bool(*b),
        JsValue::Number(n) => number_to_json(*n),
        JsValue::String(s) => Value::String(s.as_str().to_string()),
        JsValue::Object(obj) => {
            if !visiting.insert(obj.id()) {
                return Err(JsError::type_error("Converting circular structure to JSON"));
            }
            let entries: Vec<(PropertyKey, JsValue)> = obj
                .borrow()
                .store()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in &entries {
                if value.is_callable() {
                    continue;
                }
                map.insert(key.as_str().to_string(), to_json_inner(value, visiting)?);
            }
            visiting.remove(&obj.id());
            Value::Object(map)
        }
    })
}
