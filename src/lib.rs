//! JavaScript-style prototypal objects for Rust hosts
//!
//! Objects hold properties under string keys, fall back to a prototype on a
//! miss, and treat stored functions as methods that run against whichever
//! object they were called on.
//!
//! # Example
//!
//! ```
//! use jsproto::{JsFunction, JsObjectRef, JsValue};
//!
//! let root = JsObjectRef::new();
//! let child = JsObjectRef::with_prototype(root.clone());
//! root.set("double", JsFunction::method(|_, args| {
//!     Ok(JsValue::Number(args.first().map_or(0.0, JsValue::to_number) * 2.0))
//! }))?;
//!
//! // The indexer hands back the function itself...
//! assert!(child.get("double")?.is_callable());
//! // ...accessor dispatch calls it with `child` as `this`.
//! assert_eq!(child.call_method("double", &[JsValue::from(3)])?, JsValue::Number(6.0));
//! # Ok::<(), jsproto::JsError>(())
//! ```

pub mod dispatch;
pub mod error;
pub mod function;
#[cfg(feature = "json")]
pub mod json;
pub mod object;
pub mod prelude;
pub mod realm;
pub mod store;
pub mod symbol;
pub mod value;

pub use dispatch::Member;
pub use error::JsError;
pub use function::{JsFunction, NativeFn};
pub use object::{DefaultValue, JsObject, JsObjectRef, PROTOTYPE_KEY};
pub use realm::root;
pub use store::{Accessor, AccessorKind, Falsy, PropertyStore};
pub use value::CheapClone;
pub use value::JsString;
pub use value::JsValue;
pub use value::PropertyKey;
