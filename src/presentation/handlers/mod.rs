mod delete;
mod details;
mod health;
mod index;
mod query;
mod upload;

pub use delete::delete_handler;
pub use details::{detail_handler, list_details_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use query::query_handler;
pub use upload::upload_handler;
