//! Data models for the student service
//!
//! The record type itself plus the DTOs used for serializing/deserializing
//! HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::StudentPayload;
pub use responses::{DeleteResponse, HealthResponse, SaveResponse, UpdateResponse};
pub use student::{DeleteOutcome, NewStudent, Scholarship, Student, StudentPatch};
