mod in_memory_metadata_repository;
mod json_metadata_repository;

pub use in_memory_metadata_repository::InMemoryMetadataRepository;
pub use json_metadata_repository::JsonMetadataRepository;
