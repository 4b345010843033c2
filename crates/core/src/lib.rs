//! Core domain types, errors, and constants for the `asyncstore` workspace.
//!
//! ## Key Components
//!
//! - **`errors`**: the primary `Error` enum and `Result` alias used by the
//!   store and utility crates.
//! - **`types`**: `ErrorInfo`, the error-as-data value that travels inside a
//!   reply, and `Reply`, the fixed two-slot wire shape handed to the host.
//! - **`constants`**: store file name, module name, environment variable
//!   names and the generic not-ready message.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
