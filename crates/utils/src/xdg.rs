use crate::sync::env::SyncEnv;
use asyncstore_core::constants::{STORE_FILE_NAME, XDG_RUNTIME_DIR_VAR};
use std::path::{Path, PathBuf};

/// Runtime directory discovery for the settings store
pub struct XdgPaths;

impl XdgPaths {
    /// Platform runtime location as reported by the OS conventions.
    ///
    /// `None` on platforms without a runtime directory concept.
    pub fn platform_runtime_dir() -> Option<PathBuf> {
        dirs::runtime_dir().filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Runtime directory taken straight from `XDG_RUNTIME_DIR`.
    ///
    /// An unreadable variable counts as unset.
    pub fn env_runtime_dir() -> Option<PathBuf> {
        SyncEnv::var(XDG_RUNTIME_DIR_VAR)
            .ok()
            .flatten()
            .map(PathBuf::from)
    }

    /// Resolve the runtime directory.
    ///
    /// An explicit, non-empty override wins. Otherwise the platform lookup is
    /// tried before the raw environment variable.
    pub fn runtime_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
        override_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(Self::platform_runtime_dir)
            .or_else(Self::env_runtime_dir)
    }

    /// `<runtime_dir>/<application>/react-state-store`
    pub fn store_file(runtime_dir: &Path, application: &str) -> PathBuf {
        runtime_dir.join(application).join(STORE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_store_file_layout() {
        assert_eq!(
            XdgPaths::store_file(Path::new("/run/user/1000"), "org.example.app"),
            PathBuf::from("/run/user/1000/org.example.app/react-state-store")
        );
    }

    #[test]
    #[serial]
    fn test_override_wins_over_environment() {
        let resolved = SyncEnv::with_var(XDG_RUNTIME_DIR_VAR, Some("/tmp/from-env"), || {
            XdgPaths::runtime_dir(Some(Path::new("/tmp/override")))
        })
        .unwrap();
        assert_eq!(resolved, Some(PathBuf::from("/tmp/override")));
    }

    #[test]
    #[serial]
    fn test_empty_override_is_ignored() {
        let resolved = SyncEnv::with_var(XDG_RUNTIME_DIR_VAR, Some("/tmp/from-env"), || {
            XdgPaths::runtime_dir(Some(Path::new("")))
        })
        .unwrap();
        assert_eq!(resolved, Some(PathBuf::from("/tmp/from-env")));
    }

    #[test]
    #[serial]
    fn test_environment_variable_is_used() {
        let resolved = SyncEnv::with_var(XDG_RUNTIME_DIR_VAR, Some("/tmp/from-env"), || {
            XdgPaths::runtime_dir(None)
        })
        .unwrap();
        assert_eq!(resolved, Some(PathBuf::from("/tmp/from-env")));
    }

    #[test]
    #[serial]
    fn test_env_runtime_dir_reads_through_sync_env() {
        let set = SyncEnv::with_var(XDG_RUNTIME_DIR_VAR, Some("/tmp/xdg"), XdgPaths::env_runtime_dir)
            .unwrap();
        assert_eq!(set, Some(PathBuf::from("/tmp/xdg")));

        let empty =
            SyncEnv::with_var(XDG_RUNTIME_DIR_VAR, Some(""), XdgPaths::env_runtime_dir).unwrap();
        assert_eq!(empty, None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial]
    fn test_missing_runtime_dir_on_linux() {
        let resolved =
            SyncEnv::with_var(XDG_RUNTIME_DIR_VAR, None, || XdgPaths::runtime_dir(None)).unwrap();
        assert_eq!(resolved, None);
    }
}
