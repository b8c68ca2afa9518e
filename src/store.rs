//! Property storage with accessor synthesis.
//!
//! A `PropertyStore` holds an object's own properties in insertion order and
//! the per-object accessor table. Assigning a key for the first time installs
//! a `key` getter and a `key=` setter in the table; deleting the key removes
//! them again. Explicit `null` and `false` live in the store as ordinary
//! values, so "absent" (`None`) and "stored falsy" never get confused.

use log::trace;

use crate::prelude::*;
use crate::value::{CheapClone, JsString, JsValue, PropertyKey};

/// Which half of an accessor pair a member name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// Entry in the accessor table: the property a member name reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub key: PropertyKey,
    pub kind: AccessorKind,
}

/// The two stored values that must not fall through to a prototype
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Falsy {
    Null,
    False,
}

/// Setter member name for a property: `name` -> `name=`
pub fn setter_name(key: &PropertyKey) -> JsString {
    key.as_js_string().cheap_clone() + "="
}

/// Own properties plus the accessor table of one object
#[derive(Default)]
pub struct PropertyStore {
    properties: IndexMap<PropertyKey, JsValue>,
    /// Member name -> accessor. Getter names are the key itself, setter names
    /// carry a trailing `=`.
    accessors: FxHashMap<JsString, Accessor>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self {
            properties: index_map_new(),
            accessors: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            properties: index_map_with_capacity(capacity),
            accessors: FxHashMap::default(),
        }
    }

    /// Own value for `key`, `None` when the key was never set (or deleted).
    pub fn get(&self, key: &PropertyKey) -> Option<&JsValue> {
        self.properties.get(key)
    }

    /// Store `value` under `key`, installing the accessor pair on first use.
    ///
    /// Returns true when accessors were synthesized by this call.
    pub fn set(&mut self, key: PropertyKey, value: JsValue) -> bool {
        let synthesized = self.synthesize_accessors(&key);
        self.properties.insert(key, value);
        synthesized
    }

    /// Remove `key` and its accessors. Deleting an unknown key is a no-op.
    pub fn delete(&mut self, key: &PropertyKey) -> Option<JsValue> {
        let removed = self.properties.shift_remove(key);
        self.remove_accessors(key);
        removed
    }

    pub fn has(&self, key: &PropertyKey) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Own keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.properties.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &JsValue)> {
        self.properties.iter()
    }

    /// Classify a stored `null` / `false`.
    pub fn falsy(&self, key: &PropertyKey) -> Option<Falsy> {
        let value = self.properties.get(key).filter(|v| v.is_falsy_marker())?;
        Some(if value.is_null() { Falsy::Null } else { Falsy::False })
    }

    /// Keys explicitly holding `null`
    pub fn null_keys(&self) -> Vec<PropertyKey> {
        self.keys_where(Falsy::Null)
    }

    /// Keys explicitly holding `false`
    pub fn false_keys(&self) -> Vec<PropertyKey> {
        self.keys_where(Falsy::False)
    }

    fn keys_where(&self, wanted: Falsy) -> Vec<PropertyKey> {
        self.properties
            .keys()
            .filter(|key| self.falsy(key) == Some(wanted))
            .cloned()
            .collect()
    }

    /// Exact-match lookup in the accessor table
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.get(name)
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Synthesized member names, sorted
    pub fn accessor_names(&self) -> Vec<JsString> {
        let mut names: Vec<JsString> = self.accessors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Install the `key` getter and `key=` setter.
    ///
    /// A key ending in `=` can collide with the setter of another key (`a=`
    /// vs the setter of `a`). Setters outrank getters on the same name so
    /// every stored key stays assignable through `key=`; the colliding key
    /// is still readable through the indexer.
    fn synthesize_accessors(&mut self, key: &PropertyKey) -> bool {
        let mut synthesized = false;

        let getter = key.as_js_string().cheap_clone();
        if !self.accessors.contains_key(&getter) {
            self.accessors.insert(
                getter,
                Accessor {
                    key: key.cheap_clone(),
                    kind: AccessorKind::Getter,
                },
            );
            synthesized = true;
        }

        let setter = setter_name(key);
        let owned = self
            .accessors
            .get(&setter)
            .is_some_and(|accessor| accessor.kind == AccessorKind::Setter);
        if !owned {
            if let Some(shadowed) = self.accessors.get(&setter) {
                trace!("setter {} replaces getter of {}", setter, shadowed.key);
            }
            self.accessors.insert(
                setter,
                Accessor {
                    key: key.cheap_clone(),
                    kind: AccessorKind::Setter,
                },
            );
            synthesized = true;
        }

        if synthesized {
            trace!("synthesized accessors for {}", key);
        }
        synthesized
    }

    fn remove_accessors(&mut self, key: &PropertyKey) {
        let before = self.accessors.len();
        self.accessors.retain(|_, accessor| accessor.key != *key);
        if self.accessors.len() == before {
            return;
        }
        trace!("removed accessors for {}", key);

        // Hand the freed setter name back to a stored key that was shadowed
        let freed = PropertyKey::from(setter_name(key));
        if self.properties.contains_key(&freed) {
            self.accessors.insert(
                freed.as_js_string().cheap_clone(),
                Accessor {
                    key: freed,
                    kind: AccessorKind::Getter,
                },
            );
        }
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.properties.iter()).finish()
    }
}
