use crate::error::DashboardError;
use crate::lifecycle::DashboardConfig;
use crate::model::{Product, User};
use crate::product_store::{self, ProductStore};
use crate::user_store::{self, UserStore};
use resource_sync::{RemoteCollection, ResourceStore};
use std::sync::Arc;
use tracing::{info, instrument};

/// The application context: one store per resource, constructed once at startup
/// and handed to the presentation layer.
#[derive(Clone)]
pub struct Dashboard {
    pub products: ProductStore,
    pub users: UserStore,
}

impl Dashboard {
    /// Wires both stores to the HTTP backend described by `config`.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        let dashboard = Self {
            products: product_store::new(config)?,
            users: user_store::new(config)?,
        };
        info!(api = %config.api_base_url, "Dashboard ready");
        Ok(dashboard)
    }

    /// Wires both stores to the given remotes (e.g. mocks in tests).
    pub fn with_remotes(
        products: Arc<dyn RemoteCollection<Product>>,
        users: Arc<dyn RemoteCollection<User>>,
    ) -> Self {
        Self {
            products: ResourceStore::new(products),
            users: ResourceStore::new(users),
        }
    }

    /// Fetches both collections concurrently.
    ///
    /// Both fetches always run; the first failure is returned. Each store has
    /// recorded its own failure in `last_error` either way.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<(), DashboardError> {
        let (products, users) = tokio::join!(self.products.fetch_all(), self.users.fetch_all());
        products?;
        users?;
        Ok(())
    }
}
