//! Backing storage for the async local storage module.
//!
//! [`SettingsStore`] is the durable string-to-string file. [`StorageAdapter`]
//! owns one of them, resolves where it lives from the host identity and the
//! runtime directory, and exposes the synchronous primitives the module
//! façade builds on.

pub mod adapter;
pub mod settings;

pub use adapter::{AdapterState, InitError, StorageAdapter};
pub use settings::SettingsStore;
