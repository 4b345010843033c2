//! The two-slot reply handed back to the host.
//!
//! Every operation answers with an ordered list whose first slot is the
//! error slot and whose second slot (when present) is the value slot:
//!
//! - failure: `[[{"message": ...}], null]`
//! - success without a payload: `[null]`
//! - success with a payload: `[null, value]`
//!
//! Internally operations return a typed [`OpResult`]; the wire shape only
//! exists at the host boundary through the `From<OpResult<T>>` conversion.

use super::error_info::ErrorInfo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed outcome of a storage operation
pub type OpResult<T> = std::result::Result<T, ErrorInfo>;

/// Wire form of an operation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reply(Vec<Value>);

impl Reply {
    /// Failure reply: the error slot holds a list of error objects
    pub fn failure(error: &ErrorInfo) -> Self {
        Self(vec![Value::Array(vec![error.to_value()]), Value::Null])
    }

    /// Success reply for operations without a result payload
    pub fn done() -> Self {
        Self(vec![Value::Null])
    }

    /// Success reply carrying a value
    pub fn with_value(value: Value) -> Self {
        Self(vec![Value::Null, value])
    }

    /// The raw slots in order
    pub fn slots(&self) -> &[Value] {
        &self.0
    }

    /// The error slot, if populated
    pub fn error_slot(&self) -> Option<&Value> {
        self.0.first().filter(|slot| !slot.is_null())
    }

    /// The value slot, if populated
    pub fn value_slot(&self) -> Option<&Value> {
        self.0.get(1).filter(|slot| !slot.is_null())
    }

    pub fn is_error(&self) -> bool {
        self.error_slot().is_some()
    }

    /// Decode the error objects held in the error slot
    pub fn errors(&self) -> Vec<ErrorInfo> {
        match self.error_slot() {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            Some(single) => serde_json::from_value::<ErrorInfo>(single.clone())
                .into_iter()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Consume into the JSON array passed to the host callback
    pub fn into_value(self) -> Value {
        Value::Array(self.0)
    }
}

/// Conversion of an operation's success payload into the value slot
pub trait ReplyPayload {
    /// `None` means the reply has no value slot at all
    fn into_value_slot(self) -> Option<Value>;
}

impl ReplyPayload for () {
    fn into_value_slot(self) -> Option<Value> {
        None
    }
}

/// `getAllKeys`: a flat list of keys
impl ReplyPayload for Vec<String> {
    fn into_value_slot(self) -> Option<Value> {
        Some(Value::Array(self.into_iter().map(Value::String).collect()))
    }
}

/// `multiGet`: `[key, value-or-null]` pairs in request order
impl ReplyPayload for Vec<(String, Option<String>)> {
    fn into_value_slot(self) -> Option<Value> {
        let pairs = self
            .into_iter()
            .map(|(key, value)| {
                Value::Array(vec![
                    Value::String(key),
                    value.map_or(Value::Null, Value::String),
                ])
            })
            .collect();
        Some(Value::Array(pairs))
    }
}

impl<T: ReplyPayload> From<OpResult<T>> for Reply {
    fn from(result: OpResult<T>) -> Self {
        match result {
            Ok(payload) => match payload.into_value_slot() {
                Some(value) => Reply::with_value(value),
                None => Reply::done(),
            },
            Err(error) => Reply::failure(&error),
        }
    }
}
