//! Lazily initialized owner of the settings file

use crate::settings::SettingsStore;
use asyncstore_core::{Error, Result};
use asyncstore_utils::XdgPaths;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Why the adapter could not become ready
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("application identity is not defined")]
    MissingIdentity,

    #[error("application identity '{identity}' does not stay inside the runtime directory")]
    InvalidIdentity { identity: String },

    #[error("no runtime directory found and XDG_RUNTIME_DIR is not set")]
    MissingRuntimeDir,

    #[error("could not open settings file '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: Error,
    },

    #[error("storage adapter initialization was already attempted")]
    AlreadyAttempted,
}

/// Readiness of the adapter.
///
/// `Ready` and `Failed` are terminal: there is no retry after a failed
/// initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    Uninitialized,
    Ready,
    Failed,
}

/// Owns the single settings file handle for a module instance
#[derive(Debug)]
pub struct StorageAdapter {
    state: AdapterState,
    store: Option<SettingsStore>,
}

impl Default for StorageAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageAdapter {
    /// An adapter with nothing opened yet. Performs no I/O.
    pub fn new() -> Self {
        Self {
            state: AdapterState::Uninitialized,
            store: None,
        }
    }

    /// Where the settings file for `application` lives:
    /// `<runtime dir>/<application>/react-state-store`.
    pub fn resolve_store_path(
        application: &str,
        runtime_dir_hint: Option<&Path>,
    ) -> std::result::Result<PathBuf, InitError> {
        if application.is_empty() {
            return Err(InitError::MissingIdentity);
        }
        // Absolute paths and `..` would move the store out of the runtime directory
        if !Path::new(application)
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(InitError::InvalidIdentity {
                identity: application.to_owned(),
            });
        }

        let runtime_dir =
            XdgPaths::runtime_dir(runtime_dir_hint).ok_or(InitError::MissingRuntimeDir)?;
        Ok(XdgPaths::store_file(&runtime_dir, application))
    }

    /// Resolve the store location and open it with fallbacks disabled.
    ///
    /// Only the first call does anything; later calls return
    /// [`InitError::AlreadyAttempted`] and leave the state untouched.
    pub fn initialize(
        &mut self,
        application: &str,
        runtime_dir_hint: Option<&Path>,
    ) -> std::result::Result<(), InitError> {
        if self.state != AdapterState::Uninitialized {
            warn!(state = ?self.state, "storage adapter initialization requested twice");
            return Err(InitError::AlreadyAttempted);
        }

        let opened = Self::resolve_store_path(application, runtime_dir_hint).and_then(|path| {
            SettingsStore::open(&path).map_err(|source| InitError::Open { path, source })
        });

        match opened {
            Ok(mut store) => {
                // A key missing here must never be answered by another store
                store.set_fallbacks_enabled(false);
                info!(
                    application,
                    path = %store.path().display(),
                    keys = store.len(),
                    "local storage ready"
                );
                self.store = Some(store);
                self.state = AdapterState::Ready;
                Ok(())
            }
            Err(e) => {
                error!(application, error = %e, "cannot create local storage file");
                self.state = AdapterState::Failed;
                Err(e)
            }
        }
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == AdapterState::Ready
    }

    /// Location of the opened settings file, once ready
    pub fn store_path(&self) -> Option<&Path> {
        self.store.as_ref().map(SettingsStore::path)
    }

    fn store_mut(&mut self) -> Result<&mut SettingsStore> {
        self.store.as_mut().ok_or(Error::StoreUnavailable)
    }

    /// Value for `key`, `None` when absent or when not ready
    pub fn get(&self, key: &str) -> Option<String> {
        self.store
            .as_ref()
            .and_then(|store| store.value(key))
            .map(str::to_owned)
    }

    /// Write every pair, later pairs for a key overwriting earlier ones
    pub fn set_many<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.store_mut()?.set_values(pairs)
    }

    /// Remove every listed key. Absent keys are ignored.
    pub fn remove_many<I, K>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.store_mut()?.remove_keys(keys)
    }

    pub fn clear_all(&mut self) -> Result<()> {
        let store = self.store_mut()?;
        debug!(keys = store.len(), "clearing local storage");
        store.clear()
    }

    /// Snapshot of the keys present right now, in lexical order
    pub fn all_keys(&self) -> Vec<String> {
        self.store
            .as_ref()
            .map(SettingsStore::all_keys)
            .unwrap_or_default()
    }
}
