//! Error type for the dashboard application.

use resource_sync::SyncError;
use thiserror::Error;

/// Errors that can occur while setting up or driving the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A configuration value was missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A store or its remote client failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}
