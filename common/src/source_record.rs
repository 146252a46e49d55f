//! Source records returned by the search and download endpoints.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// Source identifier, echoed back to the backend exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    String(String),
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Int(i) => write!(f, "{i}"),
            ItemId::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Int(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::String(value.to_string())
    }
}

/// A source as serialized by the backend. Only `id` is interpreted; every
/// other field is kept as-is and read through the accessors below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

pub type ResultItem = SourceRecord;
pub type DownloadEntry = SourceRecord;

impl SourceRecord {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self { id: id.into(), fields: Map::new() }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn u64_field(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(Value::as_u64)
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn source_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn language(&self) -> Option<&str> {
        self.str_field("language")
    }

    pub fn provider(&self) -> Option<&str> {
        self.str_field("provider")
    }

    /// Magnet link or torrent URL.
    pub fn uri(&self) -> Option<&str> {
        self.str_field("uri")
    }

    pub fn size(&self) -> Option<u64> {
        self.u64_field("size")
    }

    pub fn seeds(&self) -> Option<u64> {
        self.u64_field("seeds")
    }

    pub fn leechers(&self) -> Option<u64> {
        self.u64_field("leechers")
    }

    pub fn state(&self) -> Option<DownloadState> {
        self.u64_field("state").and_then(DownloadState::from_code)
    }
}

/// Download states as reported by the backend's downloader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DownloadState {
    Initializing,
    Queued,
    Paused,
    Downloading,
    Sharing,
    Done,
    Archived,
}

impl DownloadState {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(DownloadState::Initializing),
            2 => Some(DownloadState::Queued),
            3 => Some(DownloadState::Paused),
            4 => Some(DownloadState::Downloading),
            5 => Some(DownloadState::Sharing),
            6 => Some(DownloadState::Done),
            7 => Some(DownloadState::Archived),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DownloadState::Initializing | DownloadState::Queued => "⋯",
            DownloadState::Paused => "‖",
            DownloadState::Downloading => "↓",
            DownloadState::Sharing => "⇅",
            DownloadState::Done => "✓",
            DownloadState::Archived => "▣",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DownloadState::Initializing => "initializing",
            DownloadState::Queued => "queued",
            DownloadState::Paused => "paused",
            DownloadState::Downloading => "downloading",
            DownloadState::Sharing => "sharing",
            DownloadState::Done => "done",
            DownloadState::Archived => "archived",
        }
    }
}
