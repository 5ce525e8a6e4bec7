use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Photo not found: {0}")]
    PhotoNotFound(String),

    #[error("Invalid photo name: {0:?}")]
    InvalidName(String),

    #[error("Photo name already in use: {0}")]
    NameTaken(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upload rejected: HTTP {status} - {body}")]
    UploadRejected { status: u16, body: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DeckError {
    /// Classify an io error by kind, keeping `context` (usually a path) in the message.
    pub fn from_io(err: io::Error, context: impl AsRef<str>) -> Self {
        let context = context.as_ref();
        match err.kind() {
            io::ErrorKind::NotFound => DeckError::NotFound(context.to_string()),
            io::ErrorKind::PermissionDenied => DeckError::PermissionDenied(context.to_string()),
            _ => DeckError::Io(io::Error::new(err.kind(), format!("{}: {}", context, err))),
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            DeckError::NotFound(_) | DeckError::PhotoNotFound(_) => true,
            DeckError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_io_errors_by_kind() {
        let err = DeckError::from_io(io::Error::from(io::ErrorKind::NotFound), "a.jpeg");
        assert!(matches!(err, DeckError::NotFound(ref p) if p == "a.jpeg"));
        assert!(err.is_not_found());

        let err = DeckError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), "dir");
        assert!(matches!(err, DeckError::PermissionDenied(_)));
        assert!(!err.is_not_found());

        let err = DeckError::from_io(io::Error::other("disk on fire"), "b.jpeg");
        match err {
            DeckError::Io(inner) => assert!(inner.to_string().contains("b.jpeg")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
