use std::fmt;

use super::file_record::FileId;

/// Uploads-relative location of a stored document, derived solely from its
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_document(file_id: &FileId) -> Self {
        Self(format!("{}.pdf", file_id.as_str()))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
