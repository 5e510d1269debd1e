//! Background Tasks Module
//!
//! Contains background tasks started alongside the server.
//!
//! # Tasks
//! - Connectivity check: pings the document store once at startup and logs
//!   the outcome without blocking or failing startup

mod connectivity;

pub use connectivity::spawn_connectivity_check;
