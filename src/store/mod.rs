//! Store Module
//!
//! The document-store seam of the service. Handlers only see the
//! [`StudentStore`] trait; the concrete backend (MongoDB or in-memory) is
//! chosen once at startup and injected through the router state.

mod memory;
mod mongo;


use async_trait::async_trait;
use mongodb::{bson::oid::ObjectId, error::ErrorKind};
use thiserror::Error;

use crate::models::{DeleteOutcome, NewStudent, Student, StudentPatch};

// Re-export public types
pub use memory::MemoryStore;
pub use mongo::MongoStore;

// == Store Error Enum ==
/// Errors raised by a student store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The identifier is not a valid 24-character hex ObjectId
    #[error("Cast to ObjectId failed for value \"{0}\" at path \"_id\"")]
    InvalidId(String),

    /// The MongoDB driver reported a failure
    #[error(transparent)]
    Database(mongodb::error::Error),

    /// No server could be selected before the driver's timeout
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { message, .. } => StoreError::Unavailable(message.clone()),
            _ => StoreError::Database(err),
        }
    }
}

/// Convenience Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// == Student Store Trait ==
/// Single-document operations over the student collection.
///
/// Every method maps to exactly one request against the backend.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All records in store-defined order.
    async fn find_all(&self) -> Result<Vec<Student>>;

    /// The record with `id`, or `None` if absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>>;

    /// Persists a new record; the store assigns its identifier.
    async fn insert(&self, student: NewStudent) -> Result<Student>;

    /// Replaces every mutable field and returns the post-update state.
    async fn replace(&self, id: &str, student: NewStudent) -> Result<Option<Student>>;

    /// Sets only the fields present in `patch` and returns the post-update state.
    async fn update(&self, id: &str, patch: StudentPatch) -> Result<Option<Student>>;

    /// Removes the record with `id` if present.
    async fn delete(&self, id: &str) -> Result<DeleteOutcome>;

    /// Round-trips to the backend to check it is reachable.
    async fn ping(&self) -> Result<()>;

    /// Releases backend resources. Called once after the server stops.
    async fn shutdown(&self) {}

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Parses a hex identifier, rejecting anything that is not an ObjectId.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// Generates a fresh identifier in the same format MongoDB uses.
pub fn new_object_id() -> String {
    ObjectId::new().to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let id = new_object_id();
        assert_eq!(id.len(), 24);
        assert_eq!(parse_object_id(&id).unwrap().to_hex(), id);
    }

    #[test]
    fn test_parse_invalid_object_id() {
        let err = parse_object_id("not-an-id").unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
        assert!(err.to_string().contains("not-an-id"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(new_object_id(), new_object_id());
    }
}
