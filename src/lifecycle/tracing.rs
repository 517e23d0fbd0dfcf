//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (`info` when unset). Store and client operations run inside spans carrying the collection
//! name, so a line such as
//!
//! ```text
//! INFO fetch_all{collection="products"}: Fetched count=30
//! ```
//!
//! already says which store it came from.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Request payloads and patches
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calls after the first are ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
