//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a JSON error with a message describing what was being decoded
    #[must_use]
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a corrupt store error
    #[must_use]
    pub fn store_corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::StoreCorrupt {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an environment variable error
    #[must_use]
    pub fn environment(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Environment {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown method error
    #[must_use]
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Error::UnknownMethod {
            method: method.into(),
        }
    }

    /// Create an invalid arguments error
    #[must_use]
    pub fn invalid_arguments(method: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArguments {
            method: method.into(),
            message: message.into(),
        }
    }
}
