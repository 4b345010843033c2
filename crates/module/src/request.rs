//! Operation requests decoded from bridge arguments

use asyncstore_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One call into the module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageRequest {
    MultiGet { keys: Vec<String> },
    MultiSet { pairs: Vec<(String, String)> },
    MultiRemove { keys: Vec<String> },
    Clear,
    GetAllKeys,
}

impl StorageRequest {
    /// Bridge method name of this request
    pub fn method(&self) -> &'static str {
        match self {
            StorageRequest::MultiGet { .. } => "multiGet",
            StorageRequest::MultiSet { .. } => "multiSet",
            StorageRequest::MultiRemove { .. } => "multiRemove",
            StorageRequest::Clear => "clear",
            StorageRequest::GetAllKeys => "getAllKeys",
        }
    }

    /// Decode a bridge call.
    ///
    /// `args` holds the marshalled arguments without the reply callback:
    /// `multiGet`/`multiRemove` take `[[key, ...]]`, `multiSet` takes
    /// `[[[key, value], ...]]`, `clear` and `getAllKeys` take `[]`.
    pub fn decode(method: &str, args: &[Value]) -> Result<Self> {
        match method {
            "multiGet" => Ok(StorageRequest::MultiGet {
                keys: single_argument(method, args)?,
            }),
            "multiSet" => Ok(StorageRequest::MultiSet {
                pairs: single_argument(method, args)?,
            }),
            "multiRemove" => Ok(StorageRequest::MultiRemove {
                keys: single_argument(method, args)?,
            }),
            "clear" => {
                no_arguments(method, args)?;
                Ok(StorageRequest::Clear)
            }
            "getAllKeys" => {
                no_arguments(method, args)?;
                Ok(StorageRequest::GetAllKeys)
            }
            other => Err(Error::unknown_method(other)),
        }
    }
}

fn single_argument<T: DeserializeOwned>(method: &str, args: &[Value]) -> Result<T> {
    match args {
        [argument] => serde_json::from_value(argument.clone())
            .map_err(|e| Error::invalid_arguments(method, e.to_string())),
        _ => Err(Error::invalid_arguments(
            method,
            format!("expected 1 argument, got {}", args.len()),
        )),
    }
}

fn no_arguments(method: &str, args: &[Value]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_arguments(
            method,
            format!("expected no arguments, got {}", args.len()),
        ))
    }
}
