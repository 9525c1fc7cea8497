mod document_service;
mod query_service;

pub use document_service::{DocumentError, DocumentService};
pub use query_service::{QueryError, QueryService};
