//! One-shot multipart upload of a single photo.
//!
//! The endpoint receives a form with one file field and answers with
//! `{ "success": bool }`. There is no retry or resumption: callers report the
//! outcome and move on.

use crate::config::DeckConfig;
use crate::error::{DeckError, Result};
use crate::model::{DataUri, PhotoRecord};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
}

/// What the endpoint said about one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub name: String,
    pub file_name: String,
    pub bytes: usize,
    pub success: bool,
}

pub struct UploadClient {
    client: Client,
    endpoint: String,
    field: String,
}

impl UploadClient {
    pub fn new(endpoint: impl Into<String>, field: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            field: field.into(),
        })
    }

    pub fn from_config(config: &DeckConfig) -> Result<Self> {
        if config.upload_endpoint.trim().is_empty() {
            return Err(DeckError::Config("upload-endpoint is not set".to_string()));
        }
        Self::new(
            config.upload_endpoint.clone(),
            config.upload_field.clone(),
            Duration::from_secs(config.upload_timeout_secs.max(1)),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a record's inline payload. Deferred records must be resolved first.
    pub async fn upload(&self, record: &PhotoRecord) -> Result<UploadReceipt> {
        let uri = record.data_uri().ok_or_else(|| {
            DeckError::InvalidDataUri(format!("{} has no loaded payload", record.name))
        })?;
        let (mime, bytes) = DataUri::parse(uri)?;
        let file_name = upload_file_name(record, &mime);
        let size = bytes.len();

        let part = Part::bytes(bytes)
            .file_name(file_name.clone())
            .mime_str(&mime)?;
        let form = Form::new().part(self.field.clone(), part);

        tracing::debug!(endpoint = %self.endpoint, %file_name, bytes = size, "uploading photo");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeckError::UploadRejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: UploadResponse = response.json().await?;
        Ok(UploadReceipt {
            name: record.name.clone(),
            file_name,
            bytes: size,
            success: parsed.success,
        })
    }
}

fn upload_file_name(record: &PhotoRecord, mime: &str) -> String {
    if let Some(file_name) = record
        .path
        .as_deref()
        .and_then(|p| p.file_name())
        .and_then(|f| f.to_str())
    {
        return file_name.to_string();
    }
    let ext = mime.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or("jpeg");
    format!("{}.{}", record.name, ext)
}
