//! Display implementations for error types

use super::types::Error;
use crate::constants::STORE_UNAVAILABLE_MESSAGE;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system error during {} on '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Json { message, source } => {
                write!(f, "JSON error: {message}: {source}")
            }
            Error::StoreCorrupt { path, message } => {
                write!(f, "settings file '{}' is corrupt: {}", path.display(), message)
            }
            Error::Environment { variable, message } => {
                write!(f, "environment variable '{variable}' error: {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            // Hosts match on this exact text, keep it verbatim.
            Error::StoreUnavailable => f.write_str(STORE_UNAVAILABLE_MESSAGE),
            Error::UnknownMethod { method } => {
                write!(f, "unknown method '{method}'")
            }
            Error::InvalidArguments { method, message } => {
                write!(f, "invalid arguments for '{method}': {message}")
            }
        }
    }
}
