//! # Client-Side Id Assignment
//!
//! The backend is a plain document store without atomic id allocation, so new
//! records get their id on the client. Neither scheme is race-free:
//!
//! - [`IdPolicy::NextNumeric`] re-reads the collection right before creating, which
//!   narrows (but does not close) the window in which two creators pick the same id.
//! - [`IdPolicy::RandomToken`] does not check for collisions at all.

use crate::entity::RemoteEntity;
use crate::error::SyncError;
use crate::remote::RemoteCollection;
use rand::Rng;
use tracing::debug;

/// Length of ids produced by [`IdPolicy::RandomToken`].
pub const TOKEN_LEN: usize = 9;

/// Strategy used to pick the id of a record before it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// `1 + max(existing ids)`, reading the collection through a fresh `list()`.
    NextNumeric,
    /// Random lowercase base-36 token of [`TOKEN_LEN`] characters.
    RandomToken,
}

impl IdPolicy {
    /// Picks the id for the next record of `T`.
    pub async fn assign<T: RemoteEntity>(
        self,
        remote: &dyn RemoteCollection<T>,
    ) -> Result<String, SyncError> {
        match self {
            IdPolicy::NextNumeric => {
                let current = remote.list().await?;
                let id = next_numeric_id(current.iter().map(|item| item.id()))?;
                debug!(collection = T::COLLECTION, existing = current.len(), %id, "Next numeric id");
                Ok(id)
            }
            IdPolicy::RandomToken => Ok(random_token()),
        }
    }
}

/// Returns `max + 1` over `ids` parsed as base-10 integers, or `"1"` when empty.
///
/// Fails with [`SyncError::MalformedId`] on the first id that does not parse.
pub fn next_numeric_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<String, SyncError> {
    let mut highest: Option<i64> = None;
    for id in ids {
        let value: i64 = id
            .trim()
            .parse()
            .map_err(|_| SyncError::MalformedId(id.to_string()))?;
        highest = Some(highest.map_or(value, |h| h.max(value)));
    }
    let next = highest.map_or(Ok(1), |h| {
        h.checked_add(1)
            .ok_or_else(|| SyncError::MalformedId(h.to_string()))
    })?;
    Ok(next.to_string())
}

/// Random lowercase alphanumeric token. Uniqueness is not checked.
pub fn random_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| {
            let digit = rng.random_range(0..36u32);
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect()
}
