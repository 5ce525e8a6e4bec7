use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_IMAGE_DIR: &str = "stored-images";
const DEFAULT_FILE_EXT: &str = ".jpeg";
const DEFAULT_MIME_TYPE: &str = "image/jpeg";
const DEFAULT_UPLOAD_ENDPOINT: &str = "http://localhost:8888/images/upload.php";
const DEFAULT_UPLOAD_FIELD: &str = "file";
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Configuration for photodeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckConfig {
    /// Photo directory, relative to the data dir
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// Extension of stored photo files (e.g. ".jpeg")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// MIME type used for display data URIs and uploads
    #[serde(default = "default_mime_type")]
    pub mime_type: String,

    #[serde(default = "default_upload_endpoint")]
    pub upload_endpoint: String,

    /// Multipart field name carrying the photo
    #[serde(default = "default_upload_field")]
    pub upload_field: String,

    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
}

fn default_image_dir() -> String {
    DEFAULT_IMAGE_DIR.to_string()
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_mime_type() -> String {
    DEFAULT_MIME_TYPE.to_string()
}

fn default_upload_endpoint() -> String {
    DEFAULT_UPLOAD_ENDPOINT.to_string()
}

fn default_upload_field() -> String {
    DEFAULT_UPLOAD_FIELD.to_string()
}

fn default_upload_timeout_secs() -> u64 {
    DEFAULT_UPLOAD_TIMEOUT_SECS
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            file_ext: default_file_ext(),
            mime_type: default_mime_type(),
            upload_endpoint: default_upload_endpoint(),
            upload_field: default_upload_field(),
            upload_timeout_secs: default_upload_timeout_secs(),
        }
    }
}

/// Keys accepted by [`DeckConfig::get`] and [`DeckConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "image-dir",
    "file-ext",
    "mime-type",
    "upload-endpoint",
    "upload-field",
    "upload-timeout",
];

impl DeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DeckError::Io)?;
        let config: DeckConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(DeckError::Io)?;
        Ok(())
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "image-dir" => Some(self.image_dir.clone()),
            "file-ext" => Some(self.file_ext.clone()),
            "mime-type" => Some(self.mime_type.clone()),
            "upload-endpoint" => Some(self.upload_endpoint.clone()),
            "upload-field" => Some(self.upload_field.clone()),
            "upload-timeout" => Some(self.upload_timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DeckError::Config(format!("Value for {} cannot be empty", key)));
        }
        match key {
            "image-dir" => self.image_dir = value.to_string(),
            "file-ext" => self.set_file_ext(value),
            "mime-type" => self.mime_type = value.to_string(),
            "upload-endpoint" => self.upload_endpoint = value.to_string(),
            "upload-field" => self.upload_field = value.to_string(),
            "upload-timeout" => {
                self.upload_timeout_secs = value.parse().map_err(|_| {
                    DeckError::Config(format!("upload-timeout must be whole seconds, got {}", value))
                })?
            }
            other => return Err(DeckError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
