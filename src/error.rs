//! Error types for the object model

use thiserror::Error;

use crate::value::{JsString, JsValue};

/// Main error type for object operations
///
/// Missing properties are not errors: they read back as `null`. Only
/// programmer errors surface here (bad keys, bad prototypes, runaway chains)
/// along with whatever a stored function chooses to return.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum JsError {
    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// Raised when a prototype chain is longer than the configured limit.
    #[error("RangeError: {message}")]
    RangeError { message: String },
}

impl JsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::TypeError {
            message: message.into(),
        }
    }

    pub fn range_error(message: impl Into<String>) -> Self {
        JsError::RangeError {
            message: message.into(),
        }
    }

    /// The lookup-depth variant (`RecursionLimitExceeded` in JS engines).
    pub fn recursion_limit(limit: usize) -> Self {
        JsError::range_error(format!(
            "Maximum prototype chain depth exceeded ({} hops)",
            limit
        ))
    }

    /// Check if this is the lookup-depth error
    pub fn is_recursion_limit(&self) -> bool {
        matches!(
            self,
            JsError::RangeError { message } if message.starts_with("Maximum prototype chain depth")
        )
    }

    /// Convert the error into a JS string value, the way a `catch` block
    /// would see it.
    pub fn to_value(&self) -> JsValue {
        JsValue::String(JsString::from(self.to_string()))
    }
}
