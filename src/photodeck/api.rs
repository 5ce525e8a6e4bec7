//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every photodeck operation, whatever UI sits on top.
//!
//! It dispatches to `commands/*.rs`, passes selectors through untouched, and returns
//! `Result<CmdResult>`. It never prints, never exits, and holds no business logic.
//!
//! `DeckApi<F, P>` is generic over both stores:
//! - Production: `DeckApi<FsFileStore, JsonPreferenceStore>` via [`DeckApi::open`]
//! - Testing: `DeckApi<MemFileStore, MemPreferenceStore>`

use crate::capture::CaptureInput;
use crate::catalog::Catalog;
use crate::commands;
use crate::config::DeckConfig;
use crate::error::Result;
use crate::nav::Page;
use crate::store::fs::FsFileStore;
use crate::store::prefs::JsonPreferenceStore;
use crate::store::{FileStore, PreferenceStore};
use crate::upload::UploadClient;
use std::path::{Path, PathBuf};

pub const PREFS_FILENAME: &str = "prefs.json";

pub struct DeckApi<F: FileStore, P: PreferenceStore> {
    catalog: Catalog<F, P>,
    uploader: UploadClient,
    data_dir: PathBuf,
}

impl DeckApi<FsFileStore, JsonPreferenceStore> {
    /// Open the on-disk deck rooted at `data_dir`, honoring its `config.json`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = DeckConfig::load(&data_dir)?;

        let files = FsFileStore::new(data_dir.join(&config.image_dir));
        let prefs = JsonPreferenceStore::new(data_dir.join(PREFS_FILENAME));
        let catalog = Catalog::new(files, prefs)
            .with_file_ext(&config.file_ext)
            .with_mime_type(&config.mime_type);
        let uploader = UploadClient::from_config(&config)?;

        tracing::debug!(data_dir = %data_dir.display(), "deck opened");
        Ok(Self::new(catalog, uploader, data_dir))
    }
}

impl<F: FileStore, P: PreferenceStore> DeckApi<F, P> {
    pub fn new(catalog: Catalog<F, P>, uploader: UploadClient, data_dir: PathBuf) -> Self {
        Self {
            catalog,
            uploader,
            data_dir,
        }
    }

    pub fn catalog(&self) -> &Catalog<F, P> {
        &self.catalog
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub async fn sync(&mut self) -> Result<commands::CmdResult> {
        commands::sync::run(&mut self.catalog).await
    }

    pub async fn capture(&mut self, inputs: Vec<CaptureInput>) -> Result<commands::CmdResult> {
        commands::capture::run(&mut self.catalog, inputs).await
    }

    pub async fn list(&mut self, page: Page) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.catalog, page).await
    }

    pub async fn delete_photos<S: AsRef<str>>(
        &mut self,
        selectors: &[S],
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, selectors).await
    }

    pub async fn toggle_favorites<S: AsRef<str>>(
        &mut self,
        selectors: &[S],
    ) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&mut self.catalog, selectors).await
    }

    pub async fn clear_favorites(&mut self) -> Result<commands::CmdResult> {
        commands::favorites::clear(&mut self.catalog).await
    }

    pub async fn clear_all(&mut self, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::clear::all(&mut self.catalog, skip_confirm).await
    }

    pub async fn clear_gallery(&mut self) -> Result<commands::CmdResult> {
        commands::clear::gallery(&mut self.catalog).await
    }

    pub async fn rename_photo(
        &mut self,
        selector: &str,
        new_name: &str,
    ) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.catalog, selector, new_name).await
    }

    pub async fn upload_photos<S: AsRef<str>>(
        &mut self,
        selectors: &[S],
    ) -> Result<commands::CmdResult> {
        commands::upload::run(&mut self.catalog, &self.uploader, selectors).await
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedPhoto, MessageLevel};
