use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to an upload. UUID v4 text when generated by
/// us, but lookups treat any string as a potential key — an id that never
/// existed is simply absent, never malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata for one uploaded document. Created on upload, destroyed on
/// delete; there is no update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file_id: FileId,
    pub username: String,
    pub original_filename: String,
    pub upload_time_utc: DateTime<Utc>,
}

impl FileRecord {
    /// Stamps the creation time at construction; the timestamp is immutable
    /// afterwards.
    pub fn new(file_id: FileId, username: String, original_filename: String) -> Self {
        Self {
            file_id,
            username,
            original_filename,
            upload_time_utc: Utc::now(),
        }
    }
}
