//! Error objects that travel inside a reply instead of being thrown

use crate::constants::STORE_UNAVAILABLE_MESSAGE;
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A host-visible error object.
///
/// Always carries a human readable `message`. Callers may merge extra
/// diagnostic fields in; those serialize next to `message` as siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorInfo {
    /// Create an error object holding only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extra: Map::new(),
        }
    }

    /// Create an error object from a message and extra diagnostic fields.
    ///
    /// A `message` entry inside `extra` is discarded; the explicit message wins.
    pub fn with_extra(message: impl Into<String>, mut extra: Map<String, Value>) -> Self {
        extra.remove("message");
        Self {
            message: message.into(),
            extra,
        }
    }

    /// The error every operation replies with while the store is not ready
    pub fn store_unavailable() -> Self {
        Self::new(STORE_UNAVAILABLE_MESSAGE)
    }

    /// Merge one more diagnostic field into the object
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "message" {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Render as the JSON object placed in a reply's error slot
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.extra.len() + 1);
        object.insert("message".to_string(), Value::String(self.message.clone()));
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl From<&Error> for ErrorInfo {
    fn from(error: &Error) -> Self {
        match error {
            Error::StoreUnavailable => Self::store_unavailable(),
            Error::UnknownMethod { method } | Error::InvalidArguments { method, .. } => {
                Self::new(error.to_string()).field("method", method.as_str())
            }
            other => Self::new(other.to_string()),
        }
    }
}

impl From<Error> for ErrorInfo {
    fn from(error: Error) -> Self {
        Self::from(&error)
    }
}
