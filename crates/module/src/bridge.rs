//! Seam between a host bridge and native modules

use crate::host::HostConfig;
use crate::registration::ModuleDescriptor;
use crate::request::StorageRequest;
use crate::storage::AsyncLocalStorage;
use asyncstore_core::{ErrorInfo, Reply};
use serde_json::Value;
use tracing::{debug, warn};

/// Reply callback supplied by the host with every call
pub type ReplyCallback<'a> = Box<dyn FnOnce(Reply) + 'a>;

/// A module the host bridge can register, attach and call by method name
pub trait NativeModule {
    /// Registration metadata for the bridge registry
    fn descriptor(&self) -> ModuleDescriptor;

    /// Hand the module its host environment. Called once, before any
    /// operation is meaningful.
    fn attach(&mut self, host: &HostConfig);

    /// Call `method` with marshalled `args`.
    ///
    /// `reply` is invoked exactly once before this returns, for successes
    /// and failures alike. Nothing is thrown back across the bridge.
    fn invoke(&mut self, method: &str, args: &[Value], reply: ReplyCallback<'_>);
}

impl NativeModule for AsyncLocalStorage {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor::async_local_storage()
    }

    fn attach(&mut self, host: &HostConfig) {
        AsyncLocalStorage::attach(self, host);
    }

    fn invoke(&mut self, method: &str, args: &[Value], reply: ReplyCallback<'_>) {
        let outcome = match StorageRequest::decode(method, args) {
            Ok(request) => {
                debug!(method = request.method(), "bridge call");
                self.execute(&request)
            }
            Err(e) => {
                warn!(method, error = %e, "rejected bridge call");
                Reply::failure(&ErrorInfo::from(&e))
            }
        };
        reply(outcome);
    }
}
