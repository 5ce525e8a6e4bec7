//! # Image Catalog
//!
//! The catalog is the one place that keeps the three photo stores consistent:
//!
//! 1. **Files**: the photo directory behind a [`FileStore`]. This is the truth. If a
//!    file exists, the photo exists.
//! 2. **Favorites**: the `favorites` key of the [`PreferenceStore`], holding full
//!    copies of records. It is denormalized and drifts unless pruned on every delete.
//! 3. **Gallery**: the in-memory ordered list, mirrored to the `galleryImages` key (as
//!    deferred records) and to a watch channel after every mutation.
//!
//! ## Reconciliation
//!
//! [`Catalog::load`] rebuilds the in-memory list from the directory (a missing
//! directory is created and treated as empty) and prunes favorites whose file is gone.
//! Two files sharing a stem (`1000.jpeg`, `1000.png`) both get an entry; the second is
//! named after its full file name.
//!
//! ## Removal Ordering
//!
//! [`Catalog::remove`] runs strictly left to right and undoes what it already did
//! when a later step fails:
//!
//! 1. keep the file bytes for rollback
//! 2. delete the file (failure: nothing has changed)
//! 3. persist favorites without the record (failure: the file is written back)
//! 4. drop the record from the in-memory list and republish the gallery
//!
//! Once the file is gone the removal has happened. A failure to rewrite the gallery
//! key after that point is logged and the next load repairs it.
//!
//! ## Concurrency
//!
//! Every mutation takes `&mut self`, so one catalog can never run two interleaved
//! mutations. Separate processes sharing a data dir still race on the preference file.

use crate::capture::CaptureSource;
use crate::error::{DeckError, Result};
use crate::model::{is_valid_name, DataUri, PhotoData, PhotoRecord, DEFAULT_MIME};
use crate::naming::{PhotoNamer, TimestampNamer};
use crate::store::{read_records, write_records, FileStore, PreferenceStore};
use crate::store::{FAVORITES_KEY, GALLERY_KEY};
use std::path::Path;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const MAX_NAME_ATTEMPTS: usize = 1024;

/// Outcome of [`Catalog::load`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub created_dir: bool,
    pub pruned_favorites: usize,
    /// Files left out because no distinct photo name could be derived for them.
    pub skipped: Vec<String>,
}

pub struct Catalog<F: FileStore, P: PreferenceStore> {
    files: F,
    prefs: P,
    namer: Box<dyn PhotoNamer>,
    file_ext: String,
    mime_type: String,
    images: Vec<PhotoRecord>,
    loaded: bool,
    feed: watch::Sender<Vec<PhotoRecord>>,
}

impl<F: FileStore, P: PreferenceStore> Catalog<F, P> {
    pub fn new(files: F, prefs: P) -> Self {
        let (feed, _) = watch::channel(Vec::new());
        Self {
            files,
            prefs,
            namer: Box::new(TimestampNamer::new()),
            file_ext: ".jpeg".to_string(),
            mime_type: DEFAULT_MIME.to_string(),
            images: Vec::new(),
            loaded: false,
            feed,
        }
    }

    pub fn with_namer(mut self, namer: impl PhotoNamer + 'static) -> Self {
        self.namer = Box::new(namer);
        self
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn with_mime_type(mut self, mime: &str) -> Self {
        self.mime_type = mime.to_string();
        self
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The ordered in-memory list. Empty until the first [`Catalog::load`].
    pub fn images(&self) -> &[PhotoRecord] {
        &self.images
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find(&self, name: &str) -> Option<&PhotoRecord> {
        self.images.iter().find(|r| r.name == name)
    }

    /// Live view of the image list, updated after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<PhotoRecord>> {
        self.feed.subscribe()
    }

    pub async fn favorites(&self) -> Result<Vec<PhotoRecord>> {
        read_records(&self.prefs, FAVORITES_KEY).await
    }

    pub async fn is_favorite(&self, record: &PhotoRecord) -> Result<bool> {
        Ok(self
            .favorites()
            .await?
            .iter()
            .any(|fav| fav.name == record.name))
    }

    /// Rebuild the image list from the photo directory.
    pub async fn load(&mut self) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        let file_names = match self.files.list().await {
            Ok(names) => names,
            Err(e) if e.is_not_found() => {
                report.created_dir = self.files.ensure_dir().await?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let mut images: Vec<PhotoRecord> = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            let mut name = self.name_from_file(&file_name);
            if images.iter().any(|r| r.name == name) {
                // Same stem under another extension, e.g. 1000.jpeg and 1000.png
                name = file_name.clone();
            }
            if images.iter().any(|r| r.name == name) {
                warn!(%file_name, %name, "skipping file with duplicate photo name");
                report.skipped.push(file_name);
                continue;
            }

            let bytes = match self.files.read(&file_name).await {
                Ok(bytes) => bytes,
                // Vanished between list and read
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            };

            images.push(PhotoRecord::persisted(
                name,
                self.files.path_of(&file_name),
                DataUri::encode(&self.mime_type, &bytes),
            ));
        }
        report.loaded = images.len();

        // Zombie favorites: copies whose backing file is gone
        let favorites = self.favorites().await?;
        let before = favorites.len();
        let kept: Vec<PhotoRecord> = favorites
            .into_iter()
            .filter(|fav| images.iter().any(|r| r.name == fav.name))
            .collect();
        if kept.len() != before {
            report.pruned_favorites = before - kept.len();
            write_records(&self.prefs, FAVORITES_KEY, &kept).await?;
            info!(pruned = report.pruned_favorites, "pruned dangling favorites");
        }

        self.images = images;
        self.loaded = true;
        self.publish().await?;

        debug!(loaded = report.loaded, created_dir = report.created_dir, "catalog loaded");
        Ok(report)
    }

    /// Persist a capture under a fresh name and refresh the catalog.
    pub async fn add(&mut self, source: CaptureSource) -> Result<PhotoRecord> {
        // Without a loaded list a fresh name could overwrite an existing file
        if !self.loaded {
            self.load().await?;
        }

        let name = self.fresh_name()?;
        let file_name = self.file_name_for(&name)?;
        self.files.write(&file_name, source.bytes()).await?;
        info!(%name, kind = %source.kind(), bytes = source.bytes().len(), "photo saved");

        self.load().await?;
        self.find(&name)
            .cloned()
            .ok_or(DeckError::PhotoNotFound(name))
    }

    /// Delete a photo everywhere. Returns `false` if there was nothing to delete.
    pub async fn remove(&mut self, record: &PhotoRecord) -> Result<bool> {
        // An empty list would otherwise be published over the gallery key
        if !self.loaded {
            self.load().await?;
        }

        let name = record.name.clone();
        let position = self.images.iter().position(|r| r.name == name);
        let file_name = self.file_name_of(record)?;

        let mut favorites = self.favorites().await?;
        let favorite_position = favorites.iter().position(|fav| fav.name == name);

        // 1. Keep the bytes so a later failure can put the file back
        let backup = match self.files.read(&file_name).await {
            Ok(bytes) => Some(bytes),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        if backup.is_none() && position.is_none() && favorite_position.is_none() {
            debug!(%name, "remove: nothing to do");
            return Ok(false);
        }

        // 2. Delete the file
        if backup.is_some() {
            self.files.delete(&file_name).await?;
        }

        // 3. Prune the favorites copy
        if let Some(pos) = favorite_position {
            favorites.remove(pos);
            if let Err(e) = write_records(&self.prefs, FAVORITES_KEY, &favorites).await {
                if let Some(bytes) = &backup {
                    if let Err(restore) = self.files.write(&file_name, bytes).await {
                        warn!(%name, error = %restore, "could not restore photo after failed remove");
                    }
                }
                return Err(e);
            }
        }

        // 4. In-memory list and gallery. The photo is gone from here on.
        if let Some(pos) = position {
            self.images.remove(pos);
        }
        self.publish_committed().await;

        info!(%name, "photo removed");
        Ok(true)
    }

    /// Flip favorite state. Returns whether the photo is a favorite afterwards.
    pub async fn toggle_favorite(&mut self, record: &PhotoRecord) -> Result<bool> {
        let mut favorites = self.favorites().await?;

        let now_favorite = match favorites.iter().position(|fav| fav.name == record.name) {
            Some(pos) => {
                favorites.remove(pos);
                false
            }
            None => {
                if !self.loaded {
                    self.load().await?;
                }
                // Favorites hold full copies, never deferred ones
                let mut copy = self
                    .find(&record.name)
                    .cloned()
                    .ok_or_else(|| DeckError::PhotoNotFound(record.name.clone()))?;
                if copy.data == PhotoData::Deferred {
                    copy.data = PhotoData::DataUri(self.resolve_data(&copy).await?);
                }
                favorites.push(copy);
                true
            }
        };

        write_records(&self.prefs, FAVORITES_KEY, &favorites).await?;
        debug!(name = %record.name, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    pub async fn clear_favorites(&mut self) -> Result<()> {
        self.prefs.remove(FAVORITES_KEY).await?;
        info!("favorites cleared");
        Ok(())
    }

    /// Delete every photo, every favorite and the gallery list.
    /// Returns the number of files deleted.
    pub async fn clear_all(&mut self) -> Result<usize> {
        self.load().await?;

        // Every file in the directory, including any that load had to skip
        let targets = self.files.list().await?;

        let mut deleted = 0;
        for file_name in &targets {
            if let Err(e) = self.files.delete(file_name).await {
                warn!(%file_name, error = %e, "clear stopped part-way, resyncing");
                if let Err(sync) = self.load().await {
                    warn!(error = %sync, "resync after failed clear also failed");
                }
                return Err(e);
            }
            deleted += 1;
        }

        self.images.clear();
        self.feed.send_replace(Vec::new());
        self.prefs.remove(FAVORITES_KEY).await?;
        self.prefs.remove(GALLERY_KEY).await?;

        info!(deleted, "catalog cleared");
        Ok(deleted)
    }

    /// Give a photo a new name, moving its file and its favorites copy along.
    pub async fn rename(&mut self, record: &PhotoRecord, new_name: &str) -> Result<PhotoRecord> {
        if !is_valid_name(new_name) {
            return Err(DeckError::InvalidName(new_name.to_string()));
        }
        if !self.loaded {
            self.load().await?;
        }

        let position = self
            .images
            .iter()
            .position(|r| r.name == record.name)
            .ok_or_else(|| DeckError::PhotoNotFound(record.name.clone()))?;
        if record.name == new_name {
            return Ok(self.images[position].clone());
        }
        if self.find(new_name).is_some() {
            return Err(DeckError::NameTaken(new_name.to_string()));
        }

        let old_file = self.file_name_of(&self.images[position])?;
        let new_file = self.file_name_for(new_name)?;
        let new_path = self.files.path_of(&new_file);
        let mut favorites = self.favorites().await?;

        // 1. Copy the bytes under the new name
        let bytes = self.files.read(&old_file).await?;
        self.files.write(&new_file, &bytes).await?;

        // 2. Retire the old file
        if let Err(e) = self.files.delete(&old_file).await {
            self.discard_file(&new_file).await;
            return Err(e);
        }

        // 3. Rewrite the favorites copy
        if let Some(fav) = favorites.iter_mut().find(|fav| fav.name == record.name) {
            fav.name = new_name.to_string();
            fav.path = Some(new_path.clone());
            if let Err(e) = write_records(&self.prefs, FAVORITES_KEY, &favorites).await {
                if let Err(restore) = self.files.write(&old_file, &bytes).await {
                    warn!(name = %record.name, error = %restore, "could not restore photo after failed rename");
                }
                self.discard_file(&new_file).await;
                return Err(e);
            }
        }

        // 4. In-memory list and gallery
        let entry = &mut self.images[position];
        entry.name = new_name.to_string();
        entry.path = Some(new_path);
        let renamed = entry.clone();
        self.publish_committed().await;

        info!(from = %record.name, to = %new_name, "photo renamed");
        Ok(renamed)
    }

    /// Display-ready data URI, reading the file for deferred records.
    pub async fn resolve_data(&self, record: &PhotoRecord) -> Result<String> {
        if let PhotoData::DataUri(uri) = &record.data {
            return Ok(uri.clone());
        }
        let file_name = self.file_name_of(record)?;
        let bytes = self.files.read(&file_name).await?;
        Ok(DataUri::encode(&self.mime_type, &bytes))
    }

    async fn publish(&self) -> Result<()> {
        self.feed.send_replace(self.images.clone());
        let gallery: Vec<PhotoRecord> = self.images.iter().map(PhotoRecord::deferred).collect();
        write_records(&self.prefs, GALLERY_KEY, &gallery).await
    }

    /// Publish after the files have already changed. A stale gallery key is
    /// rewritten by the next load, so the failure is logged, not returned.
    async fn publish_committed(&self) {
        if let Err(e) = self.publish().await {
            warn!(error = %e, "gallery list not updated");
        }
    }

    async fn discard_file(&self, file_name: &str) {
        if let Err(e) = self.files.delete(file_name).await {
            warn!(%file_name, error = %e, "could not remove partial copy");
        }
    }

    fn fresh_name(&mut self) -> Result<String> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let candidate = self.namer.next_name();
            if is_valid_name(&candidate) && self.find(&candidate).is_none() {
                return Ok(candidate);
            }
        }
        Err(DeckError::Api(
            "could not find an unused photo name".to_string(),
        ))
    }

    fn file_name_for(&self, name: &str) -> Result<String> {
        if !is_valid_name(name) {
            return Err(DeckError::InvalidName(name.to_string()));
        }
        Ok(format!("{}{}", name, self.file_ext))
    }

    /// File backing a record: the catalog's own path if known, else derived from the name.
    fn file_name_of(&self, record: &PhotoRecord) -> Result<String> {
        let known = self.find(&record.name).unwrap_or(record);
        match known
            .path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|f| f.to_str())
        {
            Some(file_name) if !file_name.starts_with('.') => Ok(file_name.to_string()),
            _ => self.file_name_for(&record.name),
        }
    }

    fn name_from_file(&self, file_name: &str) -> String {
        file_name
            .strip_suffix(self.file_ext.as_str())
            .filter(|stem| !stem.is_empty())
            .or_else(|| Path::new(file_name).file_stem().and_then(|s| s.to_str()))
            .unwrap_or(file_name)
            .to_string()
    }
}
