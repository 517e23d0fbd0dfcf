//! # Remote Resource Client
//!
//! [`RemoteCollection`] is the seam between a store and the backend. The store only ever
//! talks to `dyn RemoteCollection<T>`, so the HTTP implementation can be swapped for the
//! [`MockCollection`](crate::mock::MockCollection) in tests.

use crate::entity::RemoteEntity;
use crate::error::SyncError;
use async_trait::async_trait;

/// The four operations a collection endpoint supports.
///
/// Any failure is a [`SyncError`]; the store does not distinguish error kinds.
#[async_trait]
pub trait RemoteCollection<T: RemoteEntity>: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn list(&self) -> Result<Vec<T>, SyncError>;

    /// Submit a complete record (id included). Returns the server's copy.
    async fn create(&self, record: &T) -> Result<T, SyncError>;

    /// Submit a partial patch. Returns the full updated record.
    async fn update(&self, id: &str, patch: &T::Patch) -> Result<T, SyncError>;

    /// Remove a record by id. No body is expected on success.
    async fn delete(&self, id: &str) -> Result<(), SyncError>;
}
