//! The async local storage module exposed to a scripting host.
//!
//! A host creates an inert [`AsyncLocalStorage`], attaches it once with a
//! [`HostConfig`], and then issues operations. Each operation either returns
//! a typed [`OpResult`](asyncstore_core::OpResult) or, through
//! [`NativeModule::invoke`], answers a reply callback exactly once with the
//! two-slot wire [`Reply`](asyncstore_core::Reply).

pub mod bridge;
pub mod host;
pub mod registration;
pub mod request;
pub mod storage;

pub use bridge::{NativeModule, ReplyCallback};
pub use host::HostConfig;
pub use registration::{ModuleDescriptor, EXPORTED_METHODS};
pub use request::StorageRequest;
pub use storage::{AsyncLocalStorage, ModuleState};
