//! # Application Lifecycle
//!
//! This module builds the application context and the ambient services around it.
//!
//! - [`Dashboard`]: owns one store per resource. It is constructed once at startup and
//!   passed to whatever renders the UI, instead of living in global state.
//! - [`DashboardConfig`]: where the backend lives and how long requests may take.
//! - [`setup_tracing`]: structured logging, filtered by `RUST_LOG`.
//!
//! ```rust,ignore
//! setup_tracing();
//! let config = DashboardConfig::from_env()?;
//! let dashboard = Dashboard::from_config(&config)?;
//! dashboard.refresh().await?;
//! ```

pub mod config;
pub mod dashboard;
pub mod tracing;

pub use self::config::*;
pub use self::dashboard::*;
pub use self::tracing::setup_tracing;
