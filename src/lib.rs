//! # Admin Dashboard
//!
//! The state layer of a small shop admin dashboard: two collections (products and users)
//! kept in step with a JSON REST backend, plus the table projections the UI renders.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`resource_sync`])
//! The generic store, remote client and view projection, written once for any resource.
//!
//! ### 2. The Resources ([`model`], [`product_store`], [`user_store`])
//! - **Role**: Plain data types plus their id policy, defaults, validation and table layout.
//! - **Key items**: [`Product`](model::Product), [`User`](model::User),
//!   [`ProductStore`](product_store::ProductStore), [`UserStore`](user_store::UserStore).
//!
//! ### 3. The Context ([`lifecycle`])
//! - **Role**: Builds the [`Dashboard`](lifecycle::Dashboard) that owns both stores, loads
//!   configuration and installs tracing.
//!
//! ## Quick Start
//!
//! ```bash
//! # Against a json-server style backend on :3000
//! RUST_LOG=info cargo run
//!
//! # Elsewhere
//! DASHBOARD_API_URL=http://api.internal:8080 cargo run
//! ```

pub mod error;
pub mod lifecycle;
pub mod model;
pub mod product_store;
pub mod user_store;

pub use error::DashboardError;
