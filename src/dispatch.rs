//! Accessor dispatch: dot-style member access for hosts without it.
//!
//! `send` is the single entry point. A member name is first matched exactly
//! against the object's synthesized accessor table; names that miss it go to
//! the fallback resolver (`name=` writes, anything else reads). Either way a
//! read that resolves to a function invokes it with the calling object as
//! `this`, wherever on the chain the function was found.

use log::trace;

use crate::error::JsError;
use crate::function::JsFunction;
use crate::object::{JsObjectRef, PROTOTYPE_KEY};
use crate::store::AccessorKind;
use crate::value::{CheapClone, JsValue, PropertyKey};

/// A member name split into the property it addresses and the access kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Getter(PropertyKey),
    Setter(PropertyKey),
}

impl Member {
    /// `name=` is a setter for `name`. A trailing `==` is an operator-style
    /// name, not a setter.
    pub fn parse(name: &str) -> Member {
        match name.strip_suffix('=') {
            Some(base) if !base.is_empty() && !base.ends_with('=') => {
                Member::Setter(PropertyKey::from(base))
            }
            _ => Member::Getter(PropertyKey::from(name)),
        }
    }

    pub fn key(&self) -> &PropertyKey {
        match self {
            Member::Getter(key) | Member::Setter(key) => key,
        }
    }
}

impl JsObjectRef {
    /// Invoke a member by name: `obj.name`, `obj.name(args)`, `obj.name = v`,
    /// optionally with a trailing block.
    pub fn send(
        &self,
        name: &str,
        args: &[JsValue],
        block: Option<&JsFunction>,
    ) -> Result<JsValue, JsError> {
        let accessor = self.borrow().store.accessor(name).cloned();
        let member = match accessor {
            Some(accessor) => match accessor.kind {
                AccessorKind::Getter => Member::Getter(accessor.key),
                AccessorKind::Setter => Member::Setter(accessor.key),
            },
            None => {
                trace!("{} not in accessor table, using fallback", name);
                Member::parse(name)
            }
        };
        match member {
            Member::Setter(key) => {
                let value = args.first().cloned().unwrap_or_default();
                self.set(key, value.clone())?;
                Ok(value)
            }
            Member::Getter(key) => self.read_member(&key, args, block),
        }
    }

    /// `send` without a block
    pub fn call_method(&self, name: &str, args: &[JsValue]) -> Result<JsValue, JsError> {
        self.send(name, args, None)
    }

    /// Whether `name` is currently a synthesized accessor (or one of the
    /// built-in `prototype` members).
    pub fn responds_to(&self, name: &str) -> bool {
        Member::parse(name).key().eq_str(PROTOTYPE_KEY) || self.borrow().store.responds_to(name)
    }

    fn read_member(
        &self,
        key: &PropertyKey,
        args: &[JsValue],
        block: Option<&JsFunction>,
    ) -> Result<JsValue, JsError> {
        match self.lookup_key(key)? {
            // Decided at access time: whatever the key holds right now
            Some(JsValue::Function(func)) => func.call(self, args, block),
            Some(value) => Ok(value),
            None => match block {
                Some(block) => {
                    trace!("defining {} from call-site block", key);
                    let value = JsValue::Function(block.cheap_clone());
                    self.set(key, value.clone())?;
                    Ok(value)
                }
                None => self.missing(key),
            },
        }
    }
}
