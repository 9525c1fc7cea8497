mod answer_generator;
mod file_store;
mod metadata_repository;
mod text_extractor;

pub use answer_generator::{AnswerGenerator, AnswerGeneratorError};
pub use file_store::{FileStore, FileStoreError};
pub use metadata_repository::{MetadataRepository, MetadataRepositoryError};
pub use text_extractor::{TextExtractor, TextExtractorError};
