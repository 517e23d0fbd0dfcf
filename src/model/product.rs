use resource_sync::SyncError;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// # Resource Sync
/// This struct implements [`RemoteEntity`](resource_sync::RemoteEntity) and
/// [`Projectable`](resource_sync::Projectable), so it can be managed by a
/// [`ResourceStore`](resource_sync::ResourceStore) and shown in a paginated table.
///
/// See [`product_store`](crate::product_store) for the id policy, defaults and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Payload for creating a new product. Everything but the id.
///
/// `discount_percentage`, `rating`, `comments` and `images` are optional; the store fills
/// defaults for them before the record is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update for a product. Absent fields are left alone by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    /// Parses a raw JSON patch, rejecting fields a product does not have.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SyncError> {
        serde_json::from_value(value).map_err(|e| SyncError::InvalidPatch(e.to_string()))
    }

    /// A patch that rewrites every editable field from `draft`, as the edit dialog does.
    pub fn from_draft(draft: ProductDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            brand: Some(draft.brand),
            category: Some(draft.category),
            price: Some(draft.price),
            discount_percentage: draft.discount_percentage,
            rating: draft.rating,
            comments: Some(draft.comments),
            images: Some(draft.images),
        }
    }
}
