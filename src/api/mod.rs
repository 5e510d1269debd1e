//! API Module
//!
//! HTTP handlers and routing for the student records REST API.
//!
//! # Endpoints
//! - `GET /` - Rendered landing page
//! - `GET /students` - List every student
//! - `GET /students/:id` - Fetch one student (or `null`)
//! - `POST /students` - Create a student
//! - `PUT /students/:id` - Replace a student's fields
//! - `PATCH /students/:id` - Update the supplied fields only
//! - `DELETE /students/:id` - Delete a student
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod landing;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
