use crate::error::{DeckError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MIME: &str = "image/jpeg";

/// Payload of a photo: either inline as a data URI, or left on disk until needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum PhotoData {
    DataUri(String),
    Deferred,
}

impl From<Option<String>> for PhotoData {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(uri) if !uri.is_empty() => PhotoData::DataUri(uri),
            _ => PhotoData::Deferred,
        }
    }
}

impl From<PhotoData> for Option<String> {
    fn from(value: PhotoData) -> Self {
        match value {
            PhotoData::DataUri(uri) => Some(uri),
            PhotoData::Deferred => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub name: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    pub data: PhotoData,
}

impl PhotoRecord {
    /// A capture that only lives in memory so far.
    pub fn in_memory(name: impl Into<String>, data_uri: String) -> Self {
        Self {
            name: name.into(),
            path: None,
            data: PhotoData::DataUri(data_uri),
        }
    }

    pub fn persisted(name: impl Into<String>, path: PathBuf, data_uri: String) -> Self {
        Self {
            name: name.into(),
            path: Some(path),
            data: PhotoData::DataUri(data_uri),
        }
    }

    /// Same identity and location, payload dropped. Used for the gallery list.
    pub fn deferred(&self) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            data: PhotoData::Deferred,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.path.is_some()
    }

    pub fn data_uri(&self) -> Option<&str> {
        match &self.data {
            PhotoData::DataUri(uri) => Some(uri),
            PhotoData::Deferred => None,
        }
    }
}

/// `data:<mime>;base64,<payload>` helpers.
pub struct DataUri;

impl DataUri {
    pub fn encode(mime: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
    }

    /// Split a data URI into its MIME type and decoded bytes.
    pub fn parse(uri: &str) -> Result<(String, Vec<u8>)> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| DeckError::InvalidDataUri("missing `data:` prefix".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| DeckError::InvalidDataUri("missing `,` separator".to_string()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| DeckError::InvalidDataUri("only base64 payloads are supported".to_string()))?;
        let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };
        let bytes = STANDARD.decode(payload.trim())?;
        Ok((mime.to_string(), bytes))
    }
}

/// Names end up as file stems, so keep them to a safe portable alphabet.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name.len() <= 128
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
