use photodeck::capture::CaptureSource;
use photodeck::catalog::Catalog;
use photodeck::error::DeckError;
use photodeck::naming::SequenceNamer;
use photodeck::store::fs::FsFileStore;
use photodeck::store::prefs::JsonPreferenceStore;
use photodeck::store::{FileStore, PreferenceStore, FAVORITES_KEY, GALLERY_KEY};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, Catalog<FsFileStore, JsonPreferenceStore>) {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::new(
        FsFileStore::new(dir.path().join("stored-images")),
        JsonPreferenceStore::new(dir.path().join("prefs.json")),
    )
    .with_namer(SequenceNamer::starting_at(1000));
    (dir, catalog)
}

#[tokio::test]
async fn test_fs_store_basic_io() {
    let dir = TempDir::new().unwrap();
    let store = FsFileStore::new(dir.path().join("photos"));

    // 1. Missing directory
    assert!(matches!(store.list().await, Err(DeckError::NotFound(_))));
    assert!(store.ensure_dir().await.unwrap());
    assert!(!store.ensure_dir().await.unwrap());

    // 2. Write / read
    store.write("a.jpeg", b"hello").await.unwrap();
    assert_eq!(store.read("a.jpeg").await.unwrap(), b"hello");

    // 3. Delete, twice
    assert!(store.delete("a.jpeg").await.unwrap());
    assert!(!store.delete("a.jpeg").await.unwrap());
    assert!(matches!(
        store.read("a.jpeg").await,
        Err(DeckError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_fs_store_list_is_sorted_and_skips_tmp() {
    let dir = TempDir::new().unwrap();
    let store = FsFileStore::new(dir.path());

    store.write("2000.jpeg", b"b").await.unwrap();
    store.write("1000.jpeg", b"a").await.unwrap();
    fs::write(dir.path().join(".photo-leftover.tmp"), b"junk").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    assert_eq!(
        store.list().await.unwrap(),
        vec!["1000.jpeg".to_string(), "2000.jpeg".to_string()]
    );
}

#[tokio::test]
async fn test_fs_store_atomic_write_leaves_no_tmp() {
    let dir = TempDir::new().unwrap();
    let store = FsFileStore::new(dir.path());
    store.write("x.jpeg", b"atomic").await.unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name().into_string().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[tokio::test]
async fn test_json_prefs_roundtrip_and_remove() {
    let dir = TempDir::new().unwrap();
    let prefs = JsonPreferenceStore::new(dir.path().join("nested").join("prefs.json"));

    assert_eq!(prefs.get("favorites").await.unwrap(), None);
    prefs.set("favorites", "[]").await.unwrap();
    prefs.set("galleryImages", "[1]").await.unwrap();

    // A second handle sees the same file
    let again = JsonPreferenceStore::new(prefs.path());
    assert_eq!(again.get("galleryImages").await.unwrap().as_deref(), Some("[1]"));

    again.remove("galleryImages").await.unwrap();
    assert_eq!(prefs.get("galleryImages").await.unwrap(), None);
    assert_eq!(prefs.get("favorites").await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_catalog_on_disk_lifecycle() {
    let (dir, mut catalog) = setup();

    let report = catalog.load().await.unwrap();
    assert!(report.created_dir);
    assert!(dir.path().join("stored-images").is_dir());

    let a = catalog
        .add(CaptureSource::CameraCapture(b"A".to_vec()))
        .await
        .unwrap();
    let b = catalog
        .add(CaptureSource::FileSelection(b"B".to_vec()))
        .await
        .unwrap();
    assert_eq!(
        fs::read(dir.path().join("stored-images/1000.jpeg")).unwrap(),
        b"A"
    );

    catalog.toggle_favorite(&a).await.unwrap();
    catalog.remove(&a).await.unwrap();
    assert!(!dir.path().join("stored-images/1000.jpeg").exists());
    assert!(!catalog.is_favorite(&a).await.unwrap());

    // Gallery and favorites persisted as plain JSON
    let prefs = JsonPreferenceStore::new(dir.path().join("prefs.json"));
    let favorites = prefs.get(FAVORITES_KEY).await.unwrap().unwrap();
    assert_eq!(favorites, "[]");
    let gallery = prefs.get(GALLERY_KEY).await.unwrap().unwrap();
    assert!(gallery.contains("\"1001\""));

    catalog.remove(&b).await.unwrap();
    assert!(catalog.images().is_empty());
}

#[tokio::test]
async fn test_catalog_adopts_files_dropped_into_directory() {
    let (dir, mut catalog) = setup();
    let images = dir.path().join("stored-images");
    fs::create_dir_all(&images).unwrap();
    fs::write(images.join("holiday.jpeg"), b"sun").unwrap();
    fs::write(images.join("scan.png"), b"png").unwrap();

    catalog.load().await.unwrap();
    let names: Vec<&str> = catalog.images().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["holiday", "scan"]);

    // Removing a non-default extension uses the real file
    let scan = catalog.find("scan").unwrap().clone();
    catalog.remove(&scan).await.unwrap();
    assert!(!images.join("scan.png").exists());
}
