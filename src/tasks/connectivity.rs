//! Store Connectivity Check
//!
//! Background task that verifies the document store is reachable at startup.
//! A failure is logged and the server keeps running; requests that reach the
//! store while it is down fail on their own.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::store::StudentStore;

/// Spawns a task that pings the store once and logs the result.
///
/// The ping can take as long as the driver's server selection timeout, so it
/// runs off the startup path.
///
/// # Returns
/// A JoinHandle for the spawned task, which is aborted during graceful
/// shutdown if still pending. It resolves to whether the store answered.
pub fn spawn_connectivity_check(store: Arc<dyn StudentStore>) -> JoinHandle<bool> {
    tokio::spawn(async move {
        let backend = store.backend();
        match store.ping().await {
            Ok(()) => {
                info!(backend, "Connected to the document store");
                true
            }
            Err(e) => {
                error!(backend, error = %e, "Unable to connect to the document store");
                false
            }
        }
    })
}
