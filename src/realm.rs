//! Per-thread shared state: the root object and lookup limits.
//!
//! The realm is built lazily the first time anything asks for it and lives
//! until the thread exits. Objects are `Rc`-based, so "process-wide" means
//! "per thread": every object created on a thread shares that thread's root.

use log::debug;

use crate::object::JsObjectRef;
use crate::prelude::*;
use crate::value::CheapClone;

/// Default cap on prototype hops during a lookup
pub const DEFAULT_MAX_PROTOTYPE_DEPTH: usize = 1024;

struct Realm {
    /// Default prototype for `JsObjectRef::new()`. Its own prototype is null,
    /// so every default chain terminates here.
    root: JsObjectRef,
    max_prototype_depth: Cell<usize>,
}

impl Realm {
    fn new() -> Self {
        debug!("initializing realm root object");
        Self {
            root: JsObjectRef::with_null_prototype(),
            max_prototype_depth: Cell::new(DEFAULT_MAX_PROTOTYPE_DEPTH),
        }
    }
}

thread_local! {
    static REALM: Realm = Realm::new();
}

/// The shared root object (the `Object.prototype` of this model).
///
/// The object model never writes to it; host code may, to emulate globals.
pub fn root() -> JsObjectRef {
    REALM.with(|realm| realm.root.cheap_clone())
}

pub fn max_prototype_depth() -> usize {
    REALM.with(|realm| realm.max_prototype_depth.get())
}

/// Change the lookup hop limit for this thread. Zero is clamped to one so the
/// root is always reachable from a direct child.
pub fn set_max_prototype_depth(depth: usize) {
    let depth = depth.max(1);
    debug!("max prototype depth set to {}", depth);
    REALM.with(|realm| realm.max_prototype_depth.set(depth));
}
