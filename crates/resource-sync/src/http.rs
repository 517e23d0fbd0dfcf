//! # HTTP Collection Client
//!
//! [`HttpCollection`] implements [`RemoteCollection`] against a JSON REST backend:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list`    | `GET {base}/{collection}` |
//! | `create`  | `POST {base}/{collection}` |
//! | `update`  | `PATCH {base}/{collection}/{id}` |
//! | `delete`  | `DELETE {base}/{collection}/{id}` |
//!
//! Non-2xx responses become [`SyncError::Status`] with a short excerpt of the body.
//! Bodies are decoded with `serde_json` directly so that a [`SyncError::Decode`] names the
//! offending field and position.

use crate::entity::RemoteEntity;
use crate::error::SyncError;
use crate::remote::RemoteCollection;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Longest body excerpt carried in a status error.
const BODY_EXCERPT_LEN: usize = 200;

/// REST client for the collection of `T` under a base URL.
pub struct HttpCollection<T: RemoteEntity> {
    client: Client,
    base: Url,
    _entity: PhantomData<fn() -> T>,
}

impl<T: RemoteEntity> Clone for HttpCollection<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: RemoteEntity> HttpCollection<T> {
    /// Creates a client for `T::COLLECTION` under `base`.
    ///
    /// `timeout` of `None` means requests run to completion with no deadline.
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self, SyncError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(SyncError::Config(format!("{base} cannot be used as a base URL")));
        }
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SyncError::Config(e.to_string()))?;
        Ok(Self::with_client(client, base))
    }

    /// Creates a client sharing an existing `reqwest::Client` (connection pool).
    pub fn with_client(client: Client, base: Url) -> Self {
        Self {
            client,
            base,
            _entity: PhantomData,
        }
    }

    /// `{base}/{collection}`
    pub fn collection_url(&self) -> Url {
        self.url_for(&[T::COLLECTION])
    }

    /// `{base}/{collection}/{id}` with `id` encoded as a single path segment.
    pub fn item_url(&self, id: &str) -> Url {
        self.url_for(&[T::COLLECTION, id])
    }

    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Turns a non-2xx response into a [`SyncError::Status`].
async fn check_status(response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        body.chars().take(BODY_EXCERPT_LEN).collect()
    };
    warn!(status = status.as_u16(), %message, "Request rejected");
    Err(SyncError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Checks the status, then decodes the JSON body.
async fn decode<U: DeserializeOwned>(response: Response) -> Result<U, SyncError> {
    let body = check_status(response).await?.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| SyncError::Decode(e.to_string()))
}

#[async_trait]
impl<T: RemoteEntity> RemoteCollection<T> for HttpCollection<T> {
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn list(&self) -> Result<Vec<T>, SyncError> {
        debug!("Sending request");
        let response = self.client.get(self.collection_url()).send().await?;
        let items: Vec<T> = decode(response).await?;
        debug!(count = items.len(), "Listed");
        Ok(items)
    }

    #[instrument(skip(self, record), fields(collection = T::COLLECTION, id = record.id()))]
    async fn create(&self, record: &T) -> Result<T, SyncError> {
        debug!(?record, "Sending request");
        let response = self
            .client
            .post(self.collection_url())
            .json(record)
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self, patch), fields(collection = T::COLLECTION))]
    async fn update(&self, id: &str, patch: &T::Patch) -> Result<T, SyncError> {
        debug!(?patch, "Sending request");
        let response = self
            .client
            .patch(self.item_url(id))
            .json(patch)
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        debug!("Sending request");
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
