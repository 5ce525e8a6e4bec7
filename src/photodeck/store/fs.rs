use super::FileStore;
use crate::error::{DeckError, Result};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Photo directory on the local filesystem.
pub struct FsFileStore {
    root: PathBuf,
}

impl FsFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn display(&self, file_name: &str) -> String {
        self.root.join(file_name).display().to_string()
    }
}

#[async_trait]
impl FileStore for FsFileStore {
    async fn ensure_dir(&self) -> Result<bool> {
        if fs::try_exists(&self.root).await.unwrap_or(false) {
            return Ok(false);
        }
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DeckError::from_io(e, self.root.display().to_string()))?;
        tracing::debug!(dir = %self.root.display(), "created photo directory");
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| DeckError::from_io(e, self.root.display().to_string()))?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(DeckError::Io)? {
            let file_type = entry.file_type().await.map_err(DeckError::Io)?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                // Skip leftovers from interrupted atomic writes and dotfiles
                if name.starts_with('.') {
                    continue;
                }
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        fs::read(self.root.join(file_name))
            .await
            .map_err(|e| DeckError::from_io(e, self.display(file_name)))
    }

    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let target = self.root.join(file_name);

        // Atomic Write
        let tmp = self.root.join(format!(".photo-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, bytes)
            .await
            .map_err(|e| DeckError::from_io(e, tmp.display().to_string()))?;
        if let Err(e) = fs::rename(&tmp, &target).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(DeckError::from_io(e, self.display(file_name)));
        }
        Ok(())
    }

    async fn delete(&self, file_name: &str) -> Result<bool> {
        match fs::remove_file(self.root.join(file_name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DeckError::from_io(e, self.display(file_name))),
        }
    }

    fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}
