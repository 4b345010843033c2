//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for asyncstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for asyncstore operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The settings file exists but does not hold a string-to-string map
    StoreCorrupt { path: PathBuf, message: String },

    /// Environment variable related errors
    Environment { variable: String, message: String },

    /// Configuration errors
    Configuration { message: String },

    /// The backing store never reached the ready state
    StoreUnavailable,

    /// A bridge call named a method this module does not export
    UnknownMethod { method: String },

    /// A bridge call carried arguments that could not be decoded
    InvalidArguments { method: String, message: String },
}
