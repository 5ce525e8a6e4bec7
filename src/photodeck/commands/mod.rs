use crate::config::DeckConfig;
use crate::model::PhotoRecord;
use crate::nav::Page;

pub mod capture;
pub mod clear;
pub mod config;
pub mod delete;
pub mod favorites;
pub mod helpers;
pub mod list;
pub mod rename;
pub mod sync;
pub mod upload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient notification for the UI to show and forget.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A photo as shown in a listing: 1-based position plus its favorite flag.
#[derive(Debug, Clone)]
pub struct ListedPhoto {
    pub index: usize,
    pub record: PhotoRecord,
    pub is_favorite: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_photos: Vec<PhotoRecord>,
    pub listed_photos: Vec<ListedPhoto>,
    pub page: Option<Page>,
    pub config: Option<DeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_photos(mut self, photos: Vec<PhotoRecord>) -> Self {
        self.affected_photos = photos;
        self
    }

    pub fn with_listed_photos(mut self, page: Page, photos: Vec<ListedPhoto>) -> Self {
        self.page = Some(page);
        self.listed_photos = photos;
        self
    }

    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
