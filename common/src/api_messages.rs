//! Request and error bodies exchanged with the downloads endpoints.

use serde::{Deserialize, Serialize};

use crate::source_record::ItemId;


/// Body of `POST /downloads/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDownloadRequest {
    pub id: ItemId,
}

/// Optional body sent with mutation responses. Failures carry either `msg`
/// or `error` depending on the backend version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiMessage {
    pub msg: Option<String>,
    pub error: Option<String>,
}

impl ApiMessage {
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().or(self.error.as_deref())
    }
}
