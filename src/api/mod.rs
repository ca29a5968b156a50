pub mod client;
pub mod endpoints;
pub mod models;

use crate::error::AppError;
use models::Document;

/// Read-only accessor for a document collection.
pub trait DocumentSource {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;
}
