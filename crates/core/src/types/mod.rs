//! Reply payload types shared by the store, module and host crates

mod error_info;
mod reply;

pub use error_info::ErrorInfo;
pub use reply::{OpResult, Reply, ReplyPayload};
