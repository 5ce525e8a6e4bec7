//! # Navigation
//!
//! Pages never hand image lists to each other directly. The catalog writes the gallery
//! list to the `galleryImages` preference key after every mutation, and each page
//! reads what it needs when it is entered. State survives restarts and never depends
//! on which page came before.

use crate::catalog::Catalog;
use crate::error::{DeckError, Result};
use crate::model::{PhotoData, PhotoRecord};
use crate::store::{read_records, FileStore, PreferenceStore, GALLERY_KEY};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Camera,
    Gallery,
    Favorites,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Home => "home",
            Page::Camera => "camera",
            Page::Gallery => "gallery",
            Page::Favorites => "favorites",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Page {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "camera" => Ok(Page::Camera),
            "gallery" => Ok(Page::Gallery),
            "favorites" | "favs" => Ok(Page::Favorites),
            other => Err(DeckError::Api(format!("Unknown page: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub page: Page,
    pub records: Vec<PhotoRecord>,
}

/// Enter a page and collect the records it shows.
pub async fn navigate<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
    page: Page,
) -> Result<PageView> {
    let records = match page {
        Page::Home => Vec::new(),
        Page::Camera => {
            if !catalog.is_loaded() {
                catalog.load().await?;
            }
            catalog.images().to_vec()
        }
        Page::Gallery => gallery(catalog).await?,
        Page::Favorites => catalog.favorites().await?,
    };
    tracing::debug!(%page, records = records.len(), "navigated");
    Ok(PageView { page, records })
}

/// The durable gallery list with payloads loaded. Entries whose file is gone are dropped.
pub async fn gallery<F: FileStore, P: PreferenceStore>(
    catalog: &Catalog<F, P>,
) -> Result<Vec<PhotoRecord>> {
    let stored = read_records(catalog.prefs(), GALLERY_KEY).await?;
    let mut records = Vec::with_capacity(stored.len());
    for mut record in stored {
        if record.data == PhotoData::Deferred {
            match catalog.resolve_data(&record).await {
                Ok(uri) => record.data = PhotoData::DataUri(uri),
                Err(e) if e.is_not_found() => {
                    tracing::warn!(name = %record.name, "gallery entry has no backing file");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
        records.push(record);
    }
    Ok(records)
}

/// Forget the gallery list. Photos and favorites are untouched.
pub async fn clear_gallery<P: PreferenceStore>(prefs: &P) -> Result<()> {
    prefs.remove(GALLERY_KEY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureSource;
    use crate::naming::SequenceNamer;
    use crate::store::memory::{MemFileStore, MemPreferenceStore};

    fn catalog() -> Catalog<MemFileStore, MemPreferenceStore> {
        Catalog::new(MemFileStore::new(), MemPreferenceStore::new())
            .with_namer(SequenceNamer::starting_at(1000))
    }

    #[test]
    fn page_names_parse() {
        assert_eq!("Gallery".parse::<Page>().unwrap(), Page::Gallery);
        assert_eq!("favs".parse::<Page>().unwrap(), Page::Favorites);
        assert!("settings".parse::<Page>().is_err());
    }

    #[tokio::test]
    async fn gallery_survives_a_fresh_catalog() {
        use crate::store::fs::FsFileStore;
        use crate::store::prefs::JsonPreferenceStore;

        let dir = tempfile::tempdir().unwrap();
        let open = || {
            Catalog::new(
                FsFileStore::new(dir.path().join("stored-images")),
                JsonPreferenceStore::new(dir.path().join("prefs.json")),
            )
        };

        let mut first = open();
        first
            .add(CaptureSource::CameraCapture(b"a".to_vec()))
            .await
            .unwrap();
        drop(first);

        // New catalog over the same directory, nothing loaded yet
        let mut second = open();
        let view = navigate(&mut second, Page::Gallery).await.unwrap();
        assert_eq!(view.records.len(), 1);
        assert!(view.records[0].data_uri().is_some());
        assert!(!second.is_loaded());
    }

    #[tokio::test]
    async fn gallery_drops_entries_without_files() {
        let mut catalog = catalog();
        catalog
            .add(CaptureSource::CameraCapture(b"a".to_vec()))
            .await
            .unwrap();
        catalog
            .add(CaptureSource::FileSelection(b"b".to_vec()))
            .await
            .unwrap();
        catalog.files().delete("1000.jpeg").await.unwrap();

        let records = gallery(&catalog).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "1001");
    }

    #[tokio::test]
    async fn favorites_page_reads_the_favorites_key() {
        let mut catalog = catalog();
        let a = catalog
            .add(CaptureSource::CameraCapture(b"a".to_vec()))
            .await
            .unwrap();
        catalog.toggle_favorite(&a).await.unwrap();

        let view = navigate(&mut catalog, Page::Favorites).await.unwrap();
        assert_eq!(view.records.len(), 1);
        assert!(navigate(&mut catalog, Page::Home).await.unwrap().records.is_empty());
    }

    #[tokio::test]
    async fn clear_gallery_keeps_photos() {
        let mut catalog = catalog();
        catalog
            .add(CaptureSource::CameraCapture(b"a".to_vec()))
            .await
            .unwrap();

        clear_gallery(catalog.prefs()).await.unwrap();
        assert!(navigate(&mut catalog, Page::Gallery).await.unwrap().records.is_empty());
        assert_eq!(navigate(&mut catalog, Page::Camera).await.unwrap().records.len(), 1);
    }
}
