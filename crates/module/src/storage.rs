//! The bridge-facing storage façade

use crate::host::HostConfig;
use crate::request::StorageRequest;
use asyncstore_core::{ErrorInfo, OpResult, Reply};
use asyncstore_store::StorageAdapter;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Lifecycle of a module instance.
///
/// Only `attach` moves the module out of `Uninitialized`. `Failed` is
/// permanent for the life of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    Uninitialized,
    Ready,
    Failed,
}

/// Async local storage module.
///
/// Every operation is callable in any state. Until a successful `attach`
/// (and forever after a failed one) each answers with the
/// "Could not open storage file" error; callers cannot tell the two apart.
#[derive(Debug)]
pub struct AsyncLocalStorage {
    adapter: StorageAdapter,
    state: ModuleState,
}

impl Default for AsyncLocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLocalStorage {
    /// An unattached module. Touches nothing on disk.
    pub fn new() -> Self {
        Self {
            adapter: StorageAdapter::new(),
            state: ModuleState::Uninitialized,
        }
    }

    /// Open the backing store for `host`.
    ///
    /// Initialization failures are logged by the adapter and only show up
    /// afterwards as not-ready replies. Attaching twice is ignored.
    pub fn attach(&mut self, host: &HostConfig) -> ModuleState {
        if self.state != ModuleState::Uninitialized {
            warn!(state = ?self.state, "module already attached, ignoring");
            return self.state;
        }

        self.state = match self
            .adapter
            .initialize(&host.application_identity, host.runtime_dir.as_deref())
        {
            Ok(()) => ModuleState::Ready,
            Err(_) => ModuleState::Failed,
        };
        self.state
    }

    pub fn state(&self) -> ModuleState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.adapter.is_ready()
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.adapter.store_path()
    }

    fn ensure_ready(&self, method: &str) -> OpResult<()> {
        if self.adapter.is_ready() {
            Ok(())
        } else {
            debug!(method, state = ?self.state, "storage not ready");
            Err(ErrorInfo::store_unavailable())
        }
    }

    /// Values for `keys`, paired with their key, in request order
    pub fn multi_get<S: AsRef<str>>(&self, keys: &[S]) -> OpResult<Vec<(String, Option<String>)>> {
        self.ensure_ready("multiGet")?;
        trace!(count = keys.len(), "multiGet");

        Ok(keys
            .iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_owned(), self.adapter.get(key))
            })
            .collect())
    }

    /// Store every pair. Best effort: a failed write is logged, not reported.
    pub fn multi_set<K, V>(&mut self, pairs: &[(K, V)]) -> OpResult<()>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.ensure_ready("multiSet")?;
        trace!(count = pairs.len(), "multiSet");

        let pairs = pairs
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_ref()));
        if let Err(e) = self.adapter.set_many(pairs) {
            warn!(error = %e, "multiSet could not persist");
        }
        Ok(())
    }

    /// Remove every listed key. Keys that are not present are skipped.
    pub fn multi_remove<S: AsRef<str>>(&mut self, keys: &[S]) -> OpResult<()> {
        self.ensure_ready("multiRemove")?;
        trace!(count = keys.len(), "multiRemove");

        if let Err(e) = self.adapter.remove_many(keys) {
            warn!(error = %e, "multiRemove could not persist");
        }
        Ok(())
    }

    pub fn clear(&mut self) -> OpResult<()> {
        self.ensure_ready("clear")?;

        if let Err(e) = self.adapter.clear_all() {
            warn!(error = %e, "clear could not persist");
        }
        Ok(())
    }

    pub fn get_all_keys(&self) -> OpResult<Vec<String>> {
        self.ensure_ready("getAllKeys")?;
        Ok(self.adapter.all_keys())
    }

    /// Run a decoded request and shape its outcome for the host
    pub fn execute(&mut self, request: &StorageRequest) -> Reply {
        match request {
            StorageRequest::MultiGet { keys } => self.multi_get(keys.as_slice()).into(),
            StorageRequest::MultiSet { pairs } => self.multi_set(pairs.as_slice()).into(),
            StorageRequest::MultiRemove { keys } => self.multi_remove(keys.as_slice()).into(),
            StorageRequest::Clear => self.clear().into(),
            StorageRequest::GetAllKeys => self.get_all_keys().into(),
        }
    }
}
