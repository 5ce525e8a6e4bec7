//! # Storage Layer
//!
//! Photodeck keeps its state in two independent stores, both behind traits so the
//! catalog can run against the filesystem in production and against memory in tests.
//!
//! ## File Store
//!
//! [`FileStore`] is a thin wrapper over one photo directory. Each photo is a single
//! file named `{name}{ext}` holding the raw image bytes. The directory grows by
//! appending files; nothing else lives there apart from in-flight `.tmp` files.
//!
//! ## Preference Store
//!
//! [`PreferenceStore`] is a flat key → string map. Photodeck uses two keys:
//!
//! - [`FAVORITES_KEY`]: JSON array of full [`PhotoRecord`] copies (denormalized)
//! - [`GALLERY_KEY`]: JSON array of deferred records, the list the gallery page shows
//!
//! There is no schema versioning; the values are plain JSON arrays.
//!
//! ## Implementations
//!
//! - [`fs::FsFileStore`] / [`prefs::JsonPreferenceStore`]: production, on disk
//! - [`memory::MemFileStore`] / [`memory::MemPreferenceStore`]: in-memory, with
//!   failure injection for testing rollback paths
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── config.json          # DeckConfig
//! ├── prefs.json           # Preference Store
//! └── stored-images/
//!     ├── 1700000000000.jpeg
//!     └── 1700000000001.jpeg
//! ```

use crate::error::Result;
use crate::model::PhotoRecord;
use async_trait::async_trait;
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod prefs;

pub const FAVORITES_KEY: &str = "favorites";
pub const GALLERY_KEY: &str = "galleryImages";

/// Raw photo file I/O over a single directory.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Create the directory if missing. Returns `true` when it had to be created.
    async fn ensure_dir(&self) -> Result<bool>;

    /// File names in the directory, sorted by name.
    /// Fails with `DeckError::NotFound` when the directory does not exist.
    async fn list(&self) -> Result<Vec<String>>;

    /// Read the raw bytes of a file.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>>;

    /// Write a file. MUST be atomic so a crash never leaves a half-written photo.
    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<()>;

    /// Delete a file. Returns `Ok(false)` if it was already gone.
    async fn delete(&self, file_name: &str) -> Result<bool>;

    /// Location of a file, real for disk stores and virtual for memory stores.
    fn path_of(&self, file_name: &str) -> PathBuf;
}

/// Key-value persistence for serialized lists.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}

/// Read a JSON list stored under `key`; a missing key is an empty list.
pub async fn read_records<P: PreferenceStore + ?Sized>(
    prefs: &P,
    key: &str,
) -> Result<Vec<PhotoRecord>> {
    match prefs.get(key).await? {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Persist the whole list under `key`.
pub async fn write_records<P: PreferenceStore + ?Sized>(
    prefs: &P,
    key: &str,
    records: &[PhotoRecord],
) -> Result<()> {
    let raw = serde_json::to_string(records)?;
    prefs.set(key, &raw).await
}
