use super::{FileStore, PreferenceStore};
use crate::error::{DeckError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory photo directory for testing.
///
/// Starts without a directory, like a fresh install. Write and delete failures can
/// be switched on to exercise the catalog's rollback paths.
#[derive(Default)]
pub struct MemFileStore {
    dir_exists: AtomicBool,
    files: Mutex<BTreeMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir_exists(&self) -> bool {
        self.dir_exists.load(Ordering::SeqCst)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        lock(&self.files).contains_key(file_name)
    }

    pub fn file_count(&self) -> usize {
        lock(&self.files).len()
    }

    /// Drop a file behind the catalog's back.
    pub fn insert_raw(&self, file_name: &str, bytes: &[u8]) {
        self.dir_exists.store(true, Ordering::SeqCst);
        lock(&self.files).insert(file_name.to_string(), bytes.to_vec());
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl FileStore for MemFileStore {
    async fn ensure_dir(&self) -> Result<bool> {
        Ok(!self.dir_exists.swap(true, Ordering::SeqCst))
    }

    async fn list(&self) -> Result<Vec<String>> {
        if !self.dir_exists() {
            return Err(DeckError::NotFound("memory://stored-images".to_string()));
        }
        Ok(lock(&self.files).keys().cloned().collect())
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        lock(&self.files)
            .get(file_name)
            .cloned()
            .ok_or_else(|| DeckError::NotFound(file_name.to_string()))
    }

    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DeckError::PermissionDenied(format!(
                "simulated write error: {}",
                file_name
            )));
        }
        self.dir_exists.store(true, Ordering::SeqCst);
        lock(&self.files).insert(file_name.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, file_name: &str) -> Result<bool> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DeckError::PermissionDenied(format!(
                "simulated delete error: {}",
                file_name
            )));
        }
        Ok(lock(&self.files).remove(file_name).is_some())
    }

    fn path_of(&self, file_name: &str) -> PathBuf {
        PathBuf::from(format!("memory://stored-images/{}", file_name))
    }
}

/// In-memory preference store for testing.
#[derive(Default)]
pub struct MemPreferenceStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_removes: AtomicBool,
}

impl MemPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Fails `set` and `remove`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Fails `remove` only.
    pub fn set_fail_removes(&self, fail: bool) {
        self.fail_removes.store(fail, Ordering::SeqCst);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        lock(&self.values).contains_key(key)
    }
}

#[async_trait]
impl PreferenceStore for MemPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DeckError::Io(std::io::Error::other(format!(
                "simulated read error: {}",
                key
            ))));
        }
        Ok(lock(&self.values).get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DeckError::Io(std::io::Error::other(format!(
                "simulated write error: {}",
                key
            ))));
        }
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) || self.fail_removes.load(Ordering::SeqCst) {
            return Err(DeckError::Io(std::io::Error::other(format!(
                "simulated write error: {}",
                key
            ))));
        }
        lock(&self.values).remove(key);
        Ok(())
    }
}
