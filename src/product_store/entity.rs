//! [`RemoteEntity`] and [`Projectable`] for [`Product`].
//!
//! New products get `1 + max(existing ids)` as their id, read from a fresh list call.
//! Optional fields left empty in the draft are filled with defaults before the record
//! is sent, so the server always receives a complete product.

use super::DEFAULT_IMAGE_URL;
use crate::model::{Product, ProductDraft, ProductPatch};
use resource_sync::{IdPolicy, Projectable, RemoteEntity, SyncError};
use std::borrow::Cow;

impl RemoteEntity for Product {
    type Draft = ProductDraft;
    type Patch = ProductPatch;
    const COLLECTION: &'static str = "products";
    const ID_POLICY: IdPolicy = IdPolicy::NextNumeric;

    fn id(&self) -> &str {
        &self.id
    }

    /// Builds the complete product.
    ///
    /// # Defaults
    /// - `discount_percentage`: 0 when absent, zero or NaN
    /// - `rating`: 0 when absent, zero or NaN
    /// - `images`: one placeholder URL when empty
    fn from_draft(id: String, draft: ProductDraft) -> Result<Self, SyncError> {
        let images = if draft.images.is_empty() {
            vec![DEFAULT_IMAGE_URL.to_string()]
        } else {
            draft.images
        };
        Ok(Self {
            id,
            title: draft.title,
            description: draft.description,
            brand: draft.brand,
            category: draft.category,
            price: draft.price,
            discount_percentage: or_zero(draft.discount_percentage),
            rating: or_zero(draft.rating),
            comments: draft.comments,
            images,
        })
    }

    /// Title, brand and category must be non-blank and the price positive.
    fn validate_draft(draft: &ProductDraft) -> Result<(), String> {
        require_text("title", &draft.title)?;
        require_text("brand", &draft.brand)?;
        require_text("category", &draft.category)?;
        require_price(draft.price)
    }

    fn validate_patch(patch: &ProductPatch) -> Result<(), String> {
        if let Some(title) = &patch.title {
            require_text("title", title)?;
        }
        if let Some(brand) = &patch.brand {
            require_text("brand", brand)?;
        }
        if let Some(category) = &patch.category {
            require_text("category", category)?;
        }
        if let Some(price) = patch.price {
            require_price(price)?;
        }
        Ok(())
    }
}

impl Projectable for Product {
    const PAGE_SIZE: usize = 10;

    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn sort_price(&self) -> Option<f64> {
        Some(self.price)
    }
}

fn or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

fn require_price(price: f64) -> Result<(), String> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(format!("price must be greater than 0, got {price}"))
    }
}
