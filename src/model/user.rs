use resource_sync::SyncError;
use serde::{Deserialize, Serialize};

/// A registered user of the shop.
///
/// Contact and credential fields missing from a server record decode as empty strings,
/// so one incomplete record does not fail the whole list.
///
/// # Resource Sync
/// This struct implements [`RemoteEntity`](resource_sync::RemoteEntity) and
/// [`Projectable`](resource_sync::Projectable). See [`user_store`](crate::user_store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
}

impl User {
    /// `"{first} {last}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub phone: String,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserPatch {
    /// Parses a raw JSON patch, rejecting fields a user does not have.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SyncError> {
        serde_json::from_value(value).map_err(|e| SyncError::InvalidPatch(e.to_string()))
    }

    /// A patch that rewrites every field from `draft`.
    pub fn from_draft(draft: UserDraft) -> Self {
        Self {
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            email: Some(draft.email),
            username: Some(draft.username),
            password: Some(draft.password),
            phone: Some(draft.phone),
        }
    }

    /// The fields present in this patch, by wire name and value.
    pub(crate) fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("username", &self.username),
            ("password", &self.password),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    }
}
