//! File-backed key-value storage.
//!
//! Each key lives in its own `<key>.json` file under a base directory.
//! Writes go through a temporary file, an fsync and an atomic rename while
//! holding an advisory lock, so readers never observe a half-written value.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use counsel_core::error::{CounselError, Result};
use counsel_core::storage::KeyValueStorage;

/// Directory of JSON documents, one per key.
pub struct JsonFileStorage {
    base_dir: PathBuf,
    /// Serializes writers within this process; the file lock covers other processes.
    write_lock: Mutex<()>,
}

impl JsonFileStorage {
    const EXTENSION: &'static str = "json";

    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            write_lock: Mutex::new(()),
        }
    }

    /// Resolves the file for `key`.
    ///
    /// Keys are restricted to ASCII alphanumerics, `-` and `_` so they
    /// cannot escape the base directory.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CounselError::storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self
            .base_dir
            .join(format!("{}.{}", key, Self::EXTENSION)))
    }
}

#[async_trait]
impl KeyValueStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CounselError::io(format!(
                "Failed to read {:?}: {}",
                path, e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let value = value.to_string();

        let _guard = self.write_lock.lock().await;
        tokio::task::spawn_blocking(move || write_atomic(&path, &value))
            .await
            .map_err(|e| CounselError::internal(format!("Failed to join write task: {}", e)))?
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;

        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CounselError::io(format!(
                "Failed to remove {:?}: {}",
                path, e
            ))),
        }
    }
}

/// Writes `content` to `path` via tmp file + fsync + rename under a file lock.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| CounselError::storage(format!("Path has no parent: {:?}", path)))?;
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let _lock = FileLock::acquire(path)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| CounselError::storage(format!("Path has no file name: {:?}", path)))?;
    let tmp_path = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));

    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Exclusive advisory lock released when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| CounselError::storage(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock happens when the handle closes; removing the file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}
