//! Student Records - a RESTful student records service
//!
//! Exposes create/read/update/delete endpoints over a single student record
//! type stored in a MongoDB collection (or an in-memory store).

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod store;
pub mod tasks;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_connectivity_check;
