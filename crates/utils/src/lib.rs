//! Shared utilities for asyncstore
//!
//! File system helpers used by the settings store (atomic writes, the
//! advisory store lock), runtime directory discovery, serialized access to
//! process environment variables, and tracing setup for binaries.

pub mod atomic_file;
pub mod store_lock;
pub mod sync;
pub mod tracing;
pub mod xdg;

pub use atomic_file::*;
pub use store_lock::*;
pub use sync::*;
pub use xdg::*;
