mod file_record;
mod storage_path;

pub use file_record::{FileId, FileRecord};
pub use storage_path::StoragePath;
