use asyncstore_core::{Error, Result};
use once_cell::sync::Lazy;
use std::env;
use std::sync::RwLock;

/// Global RwLock for thread-safe environment variable access
/// Using RwLock since reads are much more common than writes
static ENV_LOCK: Lazy<RwLock<()>> = Lazy::new(|| RwLock::new(()));

/// Thread-safe environment variable operations
pub struct SyncEnv;

impl SyncEnv {
    /// Set an environment variable with thread safety
    pub fn set_var<K: AsRef<str>, V: AsRef<str>>(key: K, value: V) -> Result<()> {
        let _guard = ENV_LOCK.write().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment write lock: {e}"),
            )
        })?;

        env::set_var(key.as_ref(), value.as_ref());
        Ok(())
    }

    /// Get an environment variable with thread safety.
    ///
    /// Unset and empty variables both read as `None`.
    pub fn var<K: AsRef<str>>(key: K) -> Result<Option<String>> {
        let _guard = ENV_LOCK.read().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment read lock: {e}"),
            )
        })?;

        Ok(env::var(key.as_ref()).ok().filter(|value| !value.is_empty()))
    }

    /// Remove an environment variable with thread safety
    pub fn remove_var<K: AsRef<str>>(key: K) -> Result<()> {
        let _guard = ENV_LOCK.write().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment write lock: {e}"),
            )
        })?;

        env::remove_var(key.as_ref());
        Ok(())
    }

    /// Run `f` with `key` set to `value` (or removed for `None`), then restore
    /// whatever was there before.
    pub fn with_var<K, F, T>(key: K, value: Option<&str>, f: F) -> Result<T>
    where
        K: AsRef<str>,
        F: FnOnce() -> T,
    {
        let key = key.as_ref();
        let original = Self::var(key)?;

        match value {
            Some(value) => Self::set_var(key, value)?,
            None => Self::remove_var(key)?,
        }
        let result = f();

        match original {
            Some(original) => Self::set_var(key, original)?,
            None => Self::remove_var(key)?,
        }
        Ok(result)
    }
}
