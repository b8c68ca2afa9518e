//! Objects and prototype delegation.
//!
//! `JsObjectRef` is the shared handle host code works with. Reads consult the
//! object's own store first and walk the prototype chain on a miss; writes
//! and deletes only ever touch the object itself.

use log::{debug, trace, warn};

use crate::error::JsError;
use crate::function::JsFunction;
use crate::prelude::*;
use crate::realm;
use crate::store::{Falsy, PropertyStore};
use crate::value::{CheapClone, JsValue, PropertyKey};

/// The built-in member holding an object's prototype
pub const PROTOTYPE_KEY: &str = "prototype";

/// What a lookup yields when the whole chain misses
#[derive(Debug, Clone)]
pub enum DefaultValue {
    Value(JsValue),
    /// Called with the receiver as `this` and the missing key as argument
    Function(JsFunction),
}

/// Object state behind a `JsObjectRef`
#[derive(Default)]
pub struct JsObject {
    pub(crate) store: PropertyStore,
    /// Prototype link. `None` ends the chain (the root, or
    /// `with_null_prototype` objects).
    prototype: Option<JsObjectRef>,
    default: Option<DefaultValue>,
}

impl JsObject {
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    pub fn prototype(&self) -> Option<&JsObjectRef> {
        self.prototype.as_ref()
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }
}

/// Reference to a shared object
#[derive(Clone)]
pub struct JsObjectRef(Rc<RefCell<JsObject>>);

impl CheapClone for JsObjectRef {}

impl JsObjectRef {
    /// Create an object whose prototype is the shared root
    pub fn new() -> Self {
        Self::with_prototype(realm::root())
    }

    pub fn with_prototype(prototype: JsObjectRef) -> Self {
        Self::from_object(JsObject {
            prototype: Some(prototype),
            ..JsObject::default()
        })
    }

    /// Object with no prototype: lookups stop at its own store.
    pub fn with_null_prototype() -> Self {
        Self::from_object(JsObject::default())
    }

    fn from_object(object: JsObject) -> Self {
        JsObjectRef(Rc::new(RefCell::new(object)))
    }

    pub fn borrow(&self) -> Ref<'_, JsObject> {
        self.0.borrow()
    }

    fn borrow_mut(&self) -> RefMut<'_, JsObject> {
        self.0.borrow_mut()
    }

    /// Stable identity for the lifetime of the object
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub fn ptr_eq(&self, other: &JsObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_root(&self) -> bool {
        self.ptr_eq(&realm::root())
    }

    pub fn prototype(&self) -> Option<JsObjectRef> {
        self.borrow().prototype.clone()
    }

    /// Relink the prototype. `None` detaches the object from any chain.
    ///
    /// Fails with a `TypeError` when the new chain would lead back to this
    /// object.
    pub fn set_prototype(&self, prototype: Option<JsObjectRef>) -> Result<(), JsError> {
        if let Some(ref proto) = prototype {
            self.check_cycle(proto)?;
        }
        debug!(
            "object {:#x} prototype -> {}",
            self.id(),
            prototype
                .as_ref()
                .map_or_else(|| "null".to_string(), |p| format!("{:#x}", p.id()))
        );
        self.borrow_mut().prototype = prototype;
        Ok(())
    }

    fn check_cycle(&self, proto: &JsObjectRef) -> Result<(), JsError> {
        let limit = realm::max_prototype_depth();
        let mut current = Some(proto.cheap_clone());
        let mut hops = 0;
        while let Some(candidate) = current {
            if candidate.ptr_eq(self) {
                warn!("rejected cyclic prototype for object {:#x}", self.id());
                return Err(JsError::type_error("Cyclic __proto__ value"));
            }
            hops += 1;
            if hops > limit {
                warn!("prototype chain exceeds {} hops", limit);
                return Err(JsError::recursion_limit(limit));
            }
            current = candidate.prototype();
        }
        Ok(())
    }

    /// Resolve `key` through the prototype chain.
    ///
    /// `None` means no object on the chain holds the key; an explicit `null`
    /// or `false` is `Some` and stops the walk where it was found. The
    /// built-in `prototype` member is always present and resolves to the
    /// prototype object, or `null` when detached.
    pub fn lookup(&self, key: impl Into<PropertyKey>) -> Result<Option<JsValue>, JsError> {
        self.lookup_key(&key.into())
    }

    pub(crate) fn lookup_key(&self, key: &PropertyKey) -> Result<Option<JsValue>, JsError> {
        if key.eq_str(PROTOTYPE_KEY) {
            return Ok(Some(self.prototype().into()));
        }
        let limit = realm::max_prototype_depth();
        let mut current = self.cheap_clone();
        let mut hops = 0;
        loop {
            let next = {
                let object = current.borrow();
                if let Some(value) = object.store.get(key) {
                    return Ok(Some(value.clone()));
                }
                match object.prototype {
                    Some(ref proto) => proto.cheap_clone(),
                    None => return Ok(None),
                }
            };
            hops += 1;
            if hops > limit {
                warn!("lookup of {} exceeded {} prototype hops", key, limit);
                return Err(JsError::recursion_limit(limit));
            }
            current = next;
        }
    }

    /// Indexer read (`obj[key]`).
    ///
    /// Functions are returned as values, never invoked. A key missing on the
    /// whole chain yields the nearest default on the chain, or `null`.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Result<JsValue, JsError> {
        let key = key.into();
        match self.lookup_key(&key)? {
            Some(value) => Ok(value),
            None => self.missing(&key),
        }
    }

    /// Value for a key nobody on the chain holds.
    ///
    /// The receiver's default wins, then each prototype's in chain order.
    /// A default function always runs against the receiver.
    pub(crate) fn missing(&self, key: &PropertyKey) -> Result<JsValue, JsError> {
        match self.nearest_default()? {
            Some(DefaultValue::Value(value)) => Ok(value),
            Some(DefaultValue::Function(func)) => {
                func.call(self, &[JsValue::String(key.as_js_string().cheap_clone())], None)
            }
            None => Ok(JsValue::Null),
        }
    }

    fn nearest_default(&self) -> Result<Option<DefaultValue>, JsError> {
        let limit = realm::max_prototype_depth();
        let mut current = self.cheap_clone();
        let mut hops = 0;
        loop {
            let next = {
                let object = current.borrow();
                if let Some(ref default) = object.default {
                    return Ok(Some(default.clone()));
                }
                match object.prototype {
                    Some(ref proto) => proto.cheap_clone(),
                    None => return Ok(None),
                }
            };
            hops += 1;
            if hops > limit {
                warn!("default search exceeded {} prototype hops", limit);
                return Err(JsError::recursion_limit(limit));
            }
            current = next;
        }
    }

    /// Indexer write (`obj[key] = value`). Always writes locally.
    ///
    /// `prototype` accepts an object (relink) or `null` (detach); anything
    /// else is a `TypeError`.
    pub fn set(
        &self,
        key: impl Into<PropertyKey>,
        value: impl Into<JsValue>,
    ) -> Result<(), JsError> {
        let key = key.into();
        let value = value.into();
        if key.eq_str(PROTOTYPE_KEY) {
            return match value {
                JsValue::Object(proto) => self.set_prototype(Some(proto)),
                JsValue::Null => self.set_prototype(None),
                other => Err(JsError::type_error(format!(
                    "Object prototype may only be an Object or null: {}",
                    other.to_js_string()
                ))),
            };
        }
        trace!("set {} on object {:#x}", key, self.id());
        self.borrow_mut().store.set(key, value);
        Ok(())
    }

    /// Remove an own property and its accessors. Prototypes are untouched;
    /// deleting an unknown key (or `prototype`) is a no-op.
    pub fn delete(&self, key: impl Into<PropertyKey>) -> Option<JsValue> {
        let key = key.into();
        let removed = self.borrow_mut().store.delete(&key);
        if removed.is_some() {
            trace!("deleted {} from object {:#x}", key, self.id());
        }
        removed
    }

    /// Own stored property check. The built-in `prototype` member is never
    /// stored, so it is not reported here or by `own_keys`.
    pub fn has(&self, key: impl Into<PropertyKey>) -> bool {
        self.borrow().store.has(&key.into())
    }

    /// Own or inherited property check; true for `prototype`, like `lookup`.
    pub fn has_property(&self, key: impl Into<PropertyKey>) -> Result<bool, JsError> {
        Ok(self.lookup_key(&key.into())?.is_some())
    }

    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.borrow().store.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.borrow().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borrow().store.is_empty()
    }

    /// Own keys explicitly holding `null`
    pub fn null_keys(&self) -> Vec<PropertyKey> {
        self.borrow().store.null_keys()
    }

    /// Own keys explicitly holding `false`
    pub fn false_keys(&self) -> Vec<PropertyKey> {
        self.borrow().store.false_keys()
    }

    pub fn falsy(&self, key: impl Into<PropertyKey>) -> Option<Falsy> {
        self.borrow().store.falsy(&key.into())
    }

    /// Value returned for keys missing on the whole chain
    pub fn set_default(&self, value: impl Into<JsValue>) {
        debug!("object {:#x} default value set", self.id());
        self.borrow_mut().default = Some(DefaultValue::Value(value.into()));
    }

    /// Function computing the value for missing keys
    pub fn set_default_fn(&self, func: JsFunction) {
        debug!("object {:#x} default function set", self.id());
        self.borrow_mut().default = Some(DefaultValue::Function(func));
    }

    pub fn clear_default(&self) {
        self.borrow_mut().default = None;
    }
}

impl Default for JsObjectRef {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for JsObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for JsObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(object) = self.0.try_borrow() else {
            return write!(f, "{{<borrowed>}}");
        };
        if object.store.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, (key, value)) in object.store.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                // One level only; nested objects may be cyclic
                JsValue::Object(_) => write!(f, "{}: {{...}}", key)?,
                other => write!(f, "{}: {:?}", key, other)?,
            }
        }
        write!(f, " }}")
    }
}
