//! Host environment handed to the module when it is attached

use asyncstore_core::constants::{ASYNCSTORE_APP_ID_VAR, ASYNCSTORE_RUNTIME_DIR_VAR};
use asyncstore_core::{Result, ResultExt};
use asyncstore_utils::SyncEnv;
use std::path::PathBuf;

/// Application identity and an optional runtime directory override.
///
/// Passed explicitly into `attach` rather than read from process globals so
/// the module can be exercised without a real host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub application_identity: String,
    pub runtime_dir: Option<PathBuf>,
}

impl HostConfig {
    pub fn new(application_identity: impl Into<String>) -> Self {
        Self {
            application_identity: application_identity.into(),
            runtime_dir: None,
        }
    }

    /// Use `dir` instead of discovering the runtime directory
    #[must_use]
    pub fn with_runtime_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.runtime_dir = Some(dir.into());
        self
    }

    /// Read `ASYNCSTORE_APP_ID` and `ASYNCSTORE_RUNTIME_DIR`.
    ///
    /// An unset identity is not an error here; attaching with it fails and
    /// leaves the module un-ready.
    pub fn from_env() -> Result<Self> {
        let application_identity = SyncEnv::var(ASYNCSTORE_APP_ID_VAR)
            .context("Failed to read application identity")?
            .unwrap_or_default();
        let runtime_dir = SyncEnv::var(ASYNCSTORE_RUNTIME_DIR_VAR)
            .context("Failed to read runtime directory override")?
            .map(PathBuf::from);

        Ok(Self {
            application_identity,
            runtime_dir,
        })
    }
}
