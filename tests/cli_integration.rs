use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn photodeck(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("photodeck").unwrap();
    cmd.env("PHOTODECK_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_add_list_fav_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let picture = temp_dir.path().join("beach.jpeg");
    std::fs::write(&picture, b"not really a jpeg").unwrap();

    photodeck(temp_dir.path())
        .arg("add")
        .arg(&picture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo saved (file selection):"));

    // The photo lands in the configured image directory
    let stored: Vec<_> = std::fs::read_dir(temp_dir.path().join("stored-images"))
        .unwrap()
        .collect();
    assert_eq!(stored.len(), 1);

    photodeck(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("1."))
        .stdout(predicate::str::contains("stored-images"));

    photodeck(temp_dir.path())
        .args(["fav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites:"));

    photodeck(temp_dir.path())
        .args(["ls", "favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("★"));

    photodeck(temp_dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo deleted:"));

    photodeck(temp_dir.path())
        .args(["ls", "favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No photos on the favorites page."));
}

#[test]
fn test_rename_and_gallery() {
    let temp_dir = tempfile::tempdir().unwrap();
    let picture = temp_dir.path().join("pic.jpeg");
    std::fs::write(&picture, b"pixels").unwrap();

    photodeck(temp_dir.path())
        .args(["add", "--camera"])
        .arg(&picture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo saved (camera):"));

    photodeck(temp_dir.path())
        .args(["mv", "1", "sunset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-> sunset"));

    assert!(temp_dir.path().join("stored-images/sunset.jpeg").exists());

    photodeck(temp_dir.path())
        .args(["ls", "gallery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sunset"));

    photodeck(temp_dir.path())
        .arg("clear-gallery")
        .assert()
        .success();

    photodeck(temp_dir.path())
        .args(["ls", "gallery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No photos on the gallery page."));
}

#[test]
fn test_clear_requires_confirmation() {
    let temp_dir = tempfile::tempdir().unwrap();
    let picture = temp_dir.path().join("pic.jpeg");
    std::fs::write(&picture, b"pixels").unwrap();

    photodeck(temp_dir.path())
        .arg("add")
        .arg(&picture)
        .assert()
        .success();

    photodeck(temp_dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    photodeck(temp_dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 photo(s)."));

    photodeck(temp_dir.path())
        .args(["ls", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 photo(s), 0 favorite(s)."));
}

#[test]
fn test_unknown_selector_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    photodeck(temp_dir.path())
        .args(["rm", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    photodeck(temp_dir.path())
        .args(["add", "does-not-exist.jpeg"])
        .assert()
        .failure();

    // Nothing was written
    assert!(!temp_dir.path().join("stored-images").exists()
        || std::fs::read_dir(temp_dir.path().join("stored-images"))
            .unwrap()
            .next()
            .is_none());
}

#[test]
fn test_config_set_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();

    photodeck(temp_dir.path())
        .args(["config", "upload-timeout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30"));

    photodeck(temp_dir.path())
        .args(["config", "upload-endpoint", "https://photos.example.com/upload"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "upload-endpoint set to https://photos.example.com/upload",
        ));

    photodeck(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "upload-endpoint = https://photos.example.com/upload",
        ))
        .stdout(predicate::str::contains("file-ext = .jpeg"));

    photodeck(temp_dir.path())
        .args(["config", "upload-timeout", "soon"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("whole seconds"));
}
