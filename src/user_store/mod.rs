//! User-specific store wiring.

pub mod entity;

use crate::error::DashboardError;
use crate::lifecycle::DashboardConfig;
use crate::model::User;
use resource_sync::{HttpCollection, ResourceStore};
use std::sync::Arc;

pub type UserStore = ResourceStore<User>;

/// Creates a user store talking to the configured backend.
pub fn new(config: &DashboardConfig) -> Result<UserStore, DashboardError> {
    let remote = HttpCollection::<User>::new(&config.api_base_url, config.request_timeout())?;
    Ok(ResourceStore::new(Arc::new(remote)))
}
