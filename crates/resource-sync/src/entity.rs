//! # RemoteEntity Trait
//!
//! The `RemoteEntity` trait is the contract every resource (Product, User, …) implements to
//! be synchronized by a [`ResourceStore`](crate::ResourceStore). It names the collection
//! endpoint, the payload types for create and update, and the hooks that turn a draft into
//! a full record.
//!
//! We use associated types to keep payloads apart: a `ProductDraft` can only be submitted
//! to a product store, and a `UserPatch` only to a user store. The compiler rejects the
//! mix-up.

use crate::error::SyncError;
use crate::ids::IdPolicy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait that any resource must implement to be managed by a `ResourceStore`.
///
/// # Provided Methods (Hooks)
/// - [`RemoteEntity::validate_draft`]
/// - [`RemoteEntity::validate_patch`]
///
/// Both accept everything by default. Override them to reject payloads at the
/// boundary before any request is sent.
pub trait RemoteEntity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The payload for creating a new record (everything except the id).
    type Draft: Clone + Debug + Send + Sync + 'static;

    /// The optional-field payload for partially updating a record.
    type Patch: Clone + Debug + Serialize + Send + Sync + 'static;

    /// Endpoint segment of the collection, e.g. `"products"`.
    const COLLECTION: &'static str;

    /// How the client assigns ids to new records.
    const ID_POLICY: IdPolicy;

    /// The record's identifier, unique within its collection.
    fn id(&self) -> &str;

    /// Construct the full record from the client-assigned id and the draft.
    /// Defaults for optional fields are filled in here.
    fn from_draft(id: String, draft: Self::Draft) -> Result<Self, SyncError>;

    /// Called before an add is attempted.
    fn validate_draft(_draft: &Self::Draft) -> Result<(), String> {
        Ok(())
    }

    /// Called before an update is attempted.
    fn validate_patch(_patch: &Self::Patch) -> Result<(), String> {
        Ok(())
    }
}
