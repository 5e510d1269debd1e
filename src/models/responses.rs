//! Response DTOs for the student API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::{DeleteOutcome, Student};

/// Response body for POST /students
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    /// Confirmation message
    pub msg: String,
    /// The stored record, including its new identifier
    pub save_object: Student,
}

impl SaveResponse {
    pub fn new(msg: impl Into<String>, save_object: Student) -> Self {
        Self {
            msg: msg.into(),
            save_object,
        }
    }
}

/// Response body for PUT and PATCH /students/:id
///
/// `updated_data` is `None` when no record matched the identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub msg: String,
    pub updated_data: Option<Student>,
}

impl UpdateResponse {
    pub fn new(msg: impl Into<String>, updated_data: Option<Student>) -> Self {
        Self {
            msg: msg.into(),
            updated_data,
        }
    }
}

/// Response body for DELETE /students/:id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub msg: String,
    pub delete_result: DeleteOutcome,
}

impl DeleteResponse {
    pub fn new(msg: impl Into<String>, delete_result: DeleteOutcome) -> Self {
        Self {
            msg: msg.into(),
            delete_result,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" when the store answers, "degraded" otherwise
    pub status: String,
    /// "up" or "down"
    pub storage: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a HealthResponse with the current timestamp
    pub fn new(storage_up: bool) -> Self {
        let (status, storage) = if storage_up {
            ("healthy", "up")
        } else {
            ("degraded", "down")
        };
        Self {
            status: status.to_string(),
            storage: storage.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
