//! [`RemoteEntity`] and [`Projectable`] for [`User`].
//!
//! New users get a random 9-character token as their id; uniqueness is not checked.

use crate::model::{User, UserDraft, UserPatch};
use resource_sync::{IdPolicy, Projectable, RemoteEntity, SyncError};
use std::borrow::Cow;

impl RemoteEntity for User {
    type Draft = UserDraft;
    type Patch = UserPatch;
    const COLLECTION: &'static str = "users";
    const ID_POLICY: IdPolicy = IdPolicy::RandomToken;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: UserDraft) -> Result<Self, SyncError> {
        Ok(Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            username: draft.username,
            password: draft.password,
            phone: draft.phone,
        })
    }

    /// Every field is required.
    fn validate_draft(draft: &UserDraft) -> Result<(), String> {
        let patch = UserPatch::from_draft(draft.clone());
        Self::validate_patch(&patch)
    }

    /// Fields that are present must not be empty.
    fn validate_patch(patch: &UserPatch) -> Result<(), String> {
        match patch.present().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(format!("{field} is required")),
            None => Ok(()),
        }
    }
}

impl Projectable for User {
    const PAGE_SIZE: usize = 5;

    fn search_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.full_name())
    }
}
