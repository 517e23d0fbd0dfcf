//! Loads both collections from the backend and logs the first page of each table.

use admin_dashboard::lifecycle::{setup_tracing, Dashboard, DashboardConfig};
use admin_dashboard::model::{Product, User};
use admin_dashboard::DashboardError;
use resource_sync::{SortOrder, ViewQuery};
use tracing::{error, info, Instrument};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), DashboardError> {
    setup_tracing();

    let config = DashboardConfig::from_env()?;
    let dashboard = Dashboard::from_config(&config)?;

    let span = tracing::info_span!("initial_load");
    if let Err(e) = dashboard.refresh().instrument(span).await {
        error!(error = %e, "Initial load failed");
    }

    let products = dashboard
        .products
        .view(&ViewQuery::for_entity::<Product>().sort(SortOrder::PriceAsc));
    info!(
        page = products.page,
        page_count = products.page_count,
        total = products.total_filtered,
        "Products"
    );
    for product in &products.items {
        info!(id = %product.id, title = %product.title, category = %product.category, price = product.price, "Product");
    }

    let users = dashboard.users.view(&ViewQuery::for_entity::<User>());
    info!(
        page = users.page,
        page_count = users.page_count,
        total = users.total_filtered,
        "Users"
    );
    for user in &users.items {
        info!(id = %user.id, name = %user.full_name(), email = %user.email, "User");
    }

    Ok(())
}
