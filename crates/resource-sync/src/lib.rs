//! # Resource Sync
//!
//! This crate keeps a local, observable copy of a remote REST collection consistent with
//! the server through create, update and delete operations, and derives the filtered,
//! sorted and paginated slice the UI displays.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Remote Layer** ([`RemoteCollection`]) - list/create/update/delete against one endpoint
//! 2. **State Layer** ([`ResourceStore`]) - the local [`CollectionState`] and its reconciliation rules
//! 3. **View Layer** ([`project`]) - a pure filter → sort → paginate pipeline
//!
//! A resource type plugs in by implementing [`RemoteEntity`] (and [`Projectable`] to be
//! displayed). The store logic is written **once** and works for every resource.
//!
//! ```rust,ignore
//! let remote = HttpCollection::<Product>::new("http://localhost:3000", None)?;
//! let store = ResourceStore::new(Arc::new(remote));
//!
//! store.fetch_all().await?;
//! let state = store.snapshot();
//! let page = project(&state.items, &ViewQuery::for_entity::<Product>().sort(SortOrder::PriceAsc));
//! ```
//!
//! ## Error Model
//!
//! Every failure is a [`SyncError`]. The store records its message in `last_error`;
//! a failed fetch additionally clears the local items.
//!
//! ## Testing
//!
//! [`mock::MockCollection`] implements [`RemoteCollection`] in memory with scripted replies.
//! See the [`mock`] module for usage.

pub mod entity;
pub mod error;
pub mod http;
pub mod ids;
pub mod mock;
pub mod projection;
pub mod remote;
pub mod store;

// Re-export core types for convenience
pub use entity::RemoteEntity;
pub use error::{SyncError, SyncResult};
pub use http::HttpCollection;
pub use ids::IdPolicy;
pub use projection::{project, CategoryFilter, OwnedPage, Page, Projectable, SortOrder, ViewQuery};
pub use remote::RemoteCollection;
pub use store::{CollectionState, ResourceStore, StoreCommand, StoreStatus};
