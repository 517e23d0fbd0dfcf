//! Product-specific store wiring: id policy, defaults, validation and table layout.

pub mod entity;

use crate::error::DashboardError;
use crate::lifecycle::DashboardConfig;
use crate::model::Product;
use resource_sync::{HttpCollection, ResourceStore};
use std::sync::Arc;

/// Image used when a new product is submitted without any.
pub const DEFAULT_IMAGE_URL: &str = "https://example.com/default.jpg";

/// Categories offered by the category filter, besides "All".
pub const CATEGORIES: [&str; 5] = [
    "Headphones",
    "Smartwatches",
    "Gaming Consoles",
    "Laptops",
    "Smartphones",
];

pub type ProductStore = ResourceStore<Product>;

/// Creates a product store talking to the configured backend.
pub fn new(config: &DashboardConfig) -> Result<ProductStore, DashboardError> {
    let remote = HttpCollection::<Product>::new(&config.api_base_url, config.request_timeout())?;
    Ok(ResourceStore::new(Arc::new(remote)))
}
