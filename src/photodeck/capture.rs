use crate::error::{DeckError, Result};
use crate::model::DataUri;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    Camera,
    FileSelection,
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureKind::Camera => write!(f, "camera"),
            CaptureKind::FileSelection => write!(f, "file selection"),
        }
    }
}

/// What a camera or file picker hands back, before it is turned into bytes.
#[derive(Debug, Clone)]
pub enum CaptureInput {
    /// Inline base64, bare or wrapped in a data URI.
    Inline { kind: CaptureKind, base64: String },
    /// A platform reference to a file that still has to be read.
    Reference { kind: CaptureKind, path: PathBuf },
}

impl CaptureInput {
    pub fn kind(&self) -> CaptureKind {
        match self {
            CaptureInput::Inline { kind, .. } | CaptureInput::Reference { kind, .. } => *kind,
        }
    }

    /// Resolve to raw bytes. This is the only place the two input shapes differ.
    pub async fn resolve(self) -> Result<CaptureSource> {
        let kind = self.kind();
        let bytes = match self {
            CaptureInput::Inline { base64, .. } => {
                if base64.starts_with("data:") {
                    DataUri::parse(&base64)?.1
                } else {
                    STANDARD.decode(base64.trim())?
                }
            }
            CaptureInput::Reference { path, .. } => tokio::fs::read(&path)
                .await
                .map_err(|e| DeckError::from_io(e, path.display().to_string()))?,
        };
        Ok(CaptureSource::new(kind, bytes))
    }
}

/// Resolved capture, ready to become a photo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSource {
    CameraCapture(Vec<u8>),
    FileSelection(Vec<u8>),
}

impl CaptureSource {
    pub fn new(kind: CaptureKind, bytes: Vec<u8>) -> Self {
        match kind {
            CaptureKind::Camera => CaptureSource::CameraCapture(bytes),
            CaptureKind::FileSelection => CaptureSource::FileSelection(bytes),
        }
    }

    pub fn kind(&self) -> CaptureKind {
        match self {
            CaptureSource::CameraCapture(_) => CaptureKind::Camera,
            CaptureSource::FileSelection(_) => CaptureKind::FileSelection,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            CaptureSource::CameraCapture(bytes) | CaptureSource::FileSelection(bytes) => bytes,
        }
    }
}
