//! Function values.
//!
//! A stored function is a closure that takes its receiver explicitly. Reading
//! it through the indexer returns the function itself; invoking it through
//! accessor dispatch passes the *calling* object as `this`, which is how a
//! method defined on a prototype ends up mutating the child that called it.

use crate::error::JsError;
use crate::object::JsObjectRef;
use crate::prelude::*;
use crate::value::{CheapClone, JsString, JsValue};

/// Native function signature: `(this, args, block) -> result`
pub type NativeFn =
    dyn Fn(&JsObjectRef, &[JsValue], Option<&JsFunction>) -> Result<JsValue, JsError>;

/// A callable property value
#[derive(Clone)]
pub struct JsFunction {
    name: Option<JsString>,
    func: Rc<NativeFn>,
}

// Rc + JsString
impl CheapClone for JsFunction {}

impl JsFunction {
    /// Wrap a closure that also receives the call-site block.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&JsObjectRef, &[JsValue], Option<&JsFunction>) -> Result<JsValue, JsError>
            + 'static,
    {
        Self {
            name: None,
            func: Rc::new(func),
        }
    }

    /// Wrap a closure that only cares about `this` and the arguments.
    pub fn method<F>(func: F) -> Self
    where
        F: Fn(&JsObjectRef, &[JsValue]) -> Result<JsValue, JsError> + 'static,
    {
        Self::new(move |this, args, _block| func(this, args))
    }

    pub fn with_name(mut self, name: impl Into<JsString>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(JsString::as_str)
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("anonymous")
    }

    /// Invoke with `this` bound to the given object.
    pub fn call(
        &self,
        this: &JsObjectRef,
        args: &[JsValue],
        block: Option<&JsFunction>,
    ) -> Result<JsValue, JsError> {
        (self.func)(this, args, block)
    }

    /// Identity comparison: two handles to the same closure.
    pub fn ptr_eq(&self, other: &JsFunction) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.func).cast::<()>(),
            Rc::as_ptr(&other.func).cast::<()>(),
        )
    }
}

impl fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.display_name())
    }
}

impl PartialEq for JsFunction {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
