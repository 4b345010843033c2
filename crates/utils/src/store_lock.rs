//! Advisory lock serializing writers of one settings file

use asyncstore_core::constants::STORE_LOCK_SUFFIX;
use asyncstore_core::{Error, Result};
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Exclusive lock on the `.lock` sibling of a settings file.
///
/// Released when dropped. The lock file itself is left in place so that
/// concurrent writers always contend on the same inode.
#[derive(Debug)]
pub struct StoreLock {
    lock_file: File,
}

impl StoreLock {
    /// Path of the lock file guarding `store_path`
    pub fn lock_path_for(store_path: &Path) -> PathBuf {
        let mut name = store_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(STORE_LOCK_SUFFIX);
        store_path.with_file_name(name)
    }

    fn open(store_path: &Path) -> Result<(File, PathBuf)> {
        let lock_path = Self::lock_path_for(store_path);

        #[cfg(unix)]
        let lock_file = {
            use std::os::unix::fs::OpenOptionsExt;
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(false)
                .mode(0o600)
                .open(&lock_path)
                .map_err(|e| Error::file_system(&lock_path, "open lock file", e))?
        };

        #[cfg(not(unix))]
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| Error::file_system(&lock_path, "open lock file", e))?;

        Ok((lock_file, lock_path))
    }

    /// Acquire the lock, waiting for other writers to finish
    pub fn acquire(store_path: &Path) -> Result<Self> {
        let (lock_file, lock_path) = Self::open(store_path)?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Error::file_system(&lock_path, "lock settings file", e))?;

        Ok(Self { lock_file })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.lock_file);
    }
}
