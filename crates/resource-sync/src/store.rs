//! # Resource Store
//!
//! [`ResourceStore<T>`] holds the local copy of one remote collection and keeps it in step
//! with the backend. Every write is pessimistic: local state only changes after the server
//! confirms, and then it takes the server's copy of the record, not the client's guess.
//!
//! ## State Machine
//!
//! ```text
//!   Idle ──fetch_all──▶ Fetching ──ok──▶ Ready(error = None)
//!                          │
//!                          └──err──▶ Ready(error = Some(msg)), items cleared
//! ```
//!
//! | Operation   | Success                               | Failure                     |
//! |-------------|---------------------------------------|-----------------------------|
//! | `fetch_all` | items replaced by server list, error cleared | items cleared, error set |
//! | `add`       | server copy appended                  | items untouched, error set  |
//! | `update`    | matching entry replaced by server copy | items untouched, error set |
//!
//! An `update` reply carrying a different id than the one requested is a failure
//! ([`SyncError::IdMismatch`]). A server list that repeats an id keeps only its first copy.
//! | `remove`    | matching entry filtered out           | items untouched, error set  |
//!
//! Only a successful fetch clears `last_error`. Only fetches move the store out of `Idle`;
//! a write that fails earlier is visible through `last_error` alone.
//!
//! ## Observing State
//!
//! The state lives in a [`tokio::sync::watch`] channel. The presentation layer either
//! polls [`ResourceStore::snapshot`] or awaits changes on [`ResourceStore::subscribe`].
//!
//! ## Concurrency
//!
//! Calls are not serialized. Two overlapping operations interleave at their await points,
//! so two quick `add`s can both compute the same next id. There is no de-duplication and
//! no cancellation: each call runs to completion.

use crate::entity::RemoteEntity;
use crate::error::SyncError;
use crate::projection::{project, OwnedPage, Projectable, ViewQuery};
use crate::remote::RemoteCollection;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// The local copy of a collection plus request status.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    /// Server order; unique by id.
    pub items: Vec<T>,
    /// True while at least one fetch is outstanding.
    pub pending: bool,
    /// Message of the most recent failure, until the next successful fetch.
    pub last_error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pending: false,
            last_error: None,
        }
    }
}

/// Coarse status derived from [`CollectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    Idle,
    Fetching,
    Ready { error: Option<String> },
}

/// A store operation, for fire-and-forget dispatch from the presentation layer.
#[derive(Debug, Clone)]
pub enum StoreCommand<T: RemoteEntity> {
    FetchAll,
    Add(T::Draft),
    Update { id: String, patch: T::Patch },
    Remove { id: String },
}

struct Inner<T: RemoteEntity> {
    remote: Arc<dyn RemoteCollection<T>>,
    state: watch::Sender<CollectionState<T>>,
    in_flight: AtomicUsize,
    fetched: AtomicBool,
}

impl<T: RemoteEntity> Inner<T> {
    fn begin_fetch(&self) -> FetchGuard<'_, T> {
        self.fetched.store(true, Ordering::SeqCst);
        self.state.send_modify(|state| {
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            state.pending = true;
        });
        FetchGuard {
            inner: self,
            armed: true,
        }
    }

    fn end_fetch(&self, apply: impl FnOnce(&mut CollectionState<T>)) {
        self.state.send_modify(|state| {
            apply(state);
            let left = self.in_flight.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
            state.pending = left > 0;
        });
    }

    fn record_error(&self, error: &SyncError) {
        warn!(collection = T::COLLECTION, %error, "Operation failed");
        let message = error.to_string();
        self.state.send_modify(|state| state.last_error = Some(message));
    }
}

/// Resets `pending` even if the fetch future is dropped before completing.
struct FetchGuard<'a, T: RemoteEntity> {
    inner: &'a Inner<T>,
    armed: bool,
}

impl<T: RemoteEntity> FetchGuard<'_, T> {
    fn finish(mut self, apply: impl FnOnce(&mut CollectionState<T>)) {
        self.armed = false;
        self.inner.end_fetch(apply);
    }
}

impl<T: RemoteEntity> Drop for FetchGuard<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.inner.end_fetch(|_| {});
        }
    }
}

/// Keeps a local [`CollectionState`] consistent with a [`RemoteCollection`].
///
/// Cloning is cheap; all clones share the same state.
pub struct ResourceStore<T: RemoteEntity> {
    inner: Arc<Inner<T>>,
}

impl<T: RemoteEntity> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: RemoteEntity> ResourceStore<T> {
    /// Creates an empty store backed by `remote`.
    pub fn new(remote: Arc<dyn RemoteCollection<T>>) -> Self {
        let (state, _) = watch::channel(CollectionState::default());
        Self {
            inner: Arc::new(Inner {
                remote,
                state,
                in_flight: AtomicUsize::new(0),
                fetched: AtomicBool::new(false),
            }),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> CollectionState<T> {
        self.inner.state.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState<T>> {
        self.inner.state.subscribe()
    }

    /// The record with `id`, if present locally.
    pub fn get(&self, id: &str) -> Option<T> {
        self.inner
            .state
            .borrow()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Projects the current items through `query`.
    pub fn view(&self, query: &ViewQuery) -> OwnedPage<T>
    where
        T: Projectable,
    {
        let state = self.inner.state.borrow();
        project(&state.items, query).into()
    }

    pub fn status(&self) -> StoreStatus {
        let state = self.inner.state.borrow();
        if state.pending {
            StoreStatus::Fetching
        } else if !self.inner.fetched.load(Ordering::SeqCst) {
            StoreStatus::Idle
        } else {
            StoreStatus::Ready {
                error: state.last_error.clone(),
            }
        }
    }

    /// Replaces the local collection with the server's list.
    ///
    /// On failure the local collection is cleared rather than left stale.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn fetch_all(&self) -> Result<(), SyncError> {
        let guard = self.inner.begin_fetch();
        match self.inner.remote.list().await {
            Ok(items) => {
                let items = dedupe_by_id(items);
                info!(count = items.len(), "Fetched");
                guard.finish(|state| {
                    state.items = items;
                    state.last_error = None;
                });
                Ok(())
            }
            Err(error) => {
                warn!(%error, "Fetch failed, clearing local items");
                let message = error.to_string();
                guard.finish(|state| {
                    state.items.clear();
                    state.last_error = Some(message);
                });
                Err(error)
            }
        }
    }

    /// Assigns an id, fills defaults, creates the record and appends the server's copy.
    #[instrument(skip(self, draft), fields(collection = T::COLLECTION))]
    pub async fn add(&self, draft: T::Draft) -> Result<(), SyncError> {
        debug!(?draft, "add called");
        match self.create_record(draft).await {
            Ok(created) => {
                info!(id = created.id(), "Created");
                self.inner.state.send_modify(|state| {
                    if let Some(slot) = state.items.iter_mut().find(|i| i.id() == created.id()) {
                        warn!(id = created.id(), "Created id already present locally, replacing");
                        *slot = created;
                    } else {
                        state.items.push(created);
                    }
                });
                Ok(())
            }
            Err(error) => {
                self.inner.record_error(&error);
                Err(error)
            }
        }
    }

    async fn create_record(&self, draft: T::Draft) -> Result<T, SyncError> {
        T::validate_draft(&draft).map_err(SyncError::Validation)?;
        let id = T::ID_POLICY.assign(self.inner.remote.as_ref()).await?;
        let record = T::from_draft(id, draft)?;
        self.inner.remote.create(&record).await
    }

    /// Sends a partial patch and replaces the matching entry with the server's copy.
    #[instrument(skip(self, patch), fields(collection = T::COLLECTION))]
    pub async fn update(&self, id: &str, patch: T::Patch) -> Result<(), SyncError> {
        debug!(?patch, "update called");
        let result = match T::validate_patch(&patch) {
            Ok(()) => self
                .inner
                .remote
                .update(id, &patch)
                .await
                .and_then(|updated| expect_id(id, updated)),
            Err(reason) => Err(SyncError::Validation(reason)),
        };
        match result {
            Ok(updated) => {
                self.inner.state.send_modify(|state| {
                    for item in state.items.iter_mut().filter(|i| i.id() == id) {
                        *item = updated.clone();
                    }
                });
                info!("Updated");
                Ok(())
            }
            Err(error) => {
                self.inner.record_error(&error);
                Err(error)
            }
        }
    }

    /// Deletes the record remotely, then drops it locally.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn remove(&self, id: &str) -> Result<(), SyncError> {
        match self.inner.remote.delete(id).await {
            Ok(()) => {
                self.inner
                    .state
                    .send_modify(|state| state.items.retain(|item| item.id() != id));
                info!("Deleted");
                Ok(())
            }
            Err(error) => {
                self.inner.record_error(&error);
                Err(error)
            }
        }
    }

    /// Runs a command to completion.
    pub async fn execute(&self, command: StoreCommand<T>) -> Result<(), SyncError> {
        match command {
            StoreCommand::FetchAll => self.fetch_all().await,
            StoreCommand::Add(draft) => self.add(draft).await,
            StoreCommand::Update { id, patch } => self.update(&id, patch).await,
            StoreCommand::Remove { id } => self.remove(&id).await,
        }
    }

    /// Spawns a command on the runtime. Completion is observed through the state.
    pub fn dispatch(&self, command: StoreCommand<T>) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            // failures are already in last_error
            let _ = store.execute(command).await;
        })
    }
}

/// Keeps the first copy of every id in a server list.
fn dedupe_by_id<T: RemoteEntity>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.id().to_string()) {
            unique.push(item);
        } else {
            warn!(collection = T::COLLECTION, id = item.id(), "Server list repeats an id, dropping copy");
        }
    }
    unique
}

fn expect_id<T: RemoteEntity>(requested: &str, record: T) -> Result<T, SyncError> {
    if record.id() == requested {
        Ok(record)
    } else {
        Err(SyncError::IdMismatch {
            requested: requested.to_string(),
            returned: record.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdPolicy;
    use crate::mock::{Call, MockCollection};
    use serde::{Deserialize, Serialize};
    use tokio::sync::Notify;

    // --- Domain Definition ---

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: String,
        name: String,
        price: f64,
    }

    #[derive(Debug, Clone)]
    struct WidgetDraft {
        name: String,
        price: f64,
    }

    #[derive(Debug, Clone, Serialize)]
    struct WidgetPatch {
        name: Option<String>,
        price: Option<f64>,
    }

    impl RemoteEntity for Widget {
        type Draft = WidgetDraft;
        type Patch = WidgetPatch;
        const COLLECTION: &'static str = "widgets";
        const ID_POLICY: IdPolicy = IdPolicy::NextNumeric;

        fn id(&self) -> &str {
            &self.id
        }

        fn from_draft(id: String, draft: WidgetDraft) -> Result<Self, SyncError> {
            Ok(Self {
                id,
                name: draft.name,
                price: draft.price,
            })
        }

        fn validate_draft(draft: &WidgetDraft) -> Result<(), String> {
            if draft.name.trim().is_empty() {
                return Err("name is required".into());
            }
            Ok(())
        }
    }

    fn widget(id: &str, price: f64) -> Widget {
        Widget {
            id: id.into(),
            name: format!("widget {id}"),
            price,
        }
    }

    fn setup() -> (Arc<MockCollection<Widget>>, ResourceStore<Widget>) {
        let mock = Arc::new(MockCollection::new());
        let store = ResourceStore::new(mock.clone());
        (mock, store)
    }

    async fn seeded(items: Vec<Widget>) -> (Arc<MockCollection<Widget>>, ResourceStore<Widget>) {
        let (mock, store) = setup();
        mock.expect_list().return_ok(items);
        store.fetch_all().await.unwrap();
        (mock, store)
    }

    // --- Tests ---

    #[tokio::test]
    async fn starts_idle_and_empty() {
        let (_mock, store) = setup();
        assert_eq!(store.status(), StoreStatus::Idle);
        assert_eq!(store.snapshot(), CollectionState::default());
    }

    #[tokio::test]
    async fn fetch_replaces_items_with_latest_server_list() {
        let (mock, store) = setup();
        mock.expect_list().return_ok(vec![widget("1", 10.0)]);
        mock.expect_list()
            .return_ok(vec![widget("2", 20.0), widget("3", 30.0)]);

        store.fetch_all().await.unwrap();
        store.fetch_all().await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.items, vec![widget("2", 20.0), widget("3", 30.0)]);
        assert!(!state.pending);
        assert_eq!(state.last_error, None);
        assert_eq!(store.status(), StoreStatus::Ready { error: None });
        mock.verify();
    }

    #[tokio::test]
    async fn failed_fetch_clears_items_and_sets_error() {
        let (mock, store) = seeded(vec![widget("1", 10.0)]).await;
        mock.expect_list()
            .return_err(SyncError::Transport("connection refused".into()));

        let result = store.fetch_all().await;

        assert!(result.is_err());
        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert!(!state.pending);
        assert_eq!(
            state.last_error.as_deref(),
            Some("Network error: connection refused")
        );
        assert!(matches!(store.status(), StoreStatus::Ready { error: Some(_) }));
    }

    #[tokio::test]
    async fn successful_fetch_clears_previous_error() {
        let (mock, store) = setup();
        mock.expect_list()
            .return_err(SyncError::Transport("down".into()));
        mock.expect_list().return_ok(vec![widget("1", 1.0)]);

        let _ = store.fetch_all().await;
        store.fetch_all().await.unwrap();

        assert_eq!(store.snapshot().last_error, None);
    }

    #[tokio::test]
    async fn fetch_keeps_first_copy_of_repeated_ids() {
        let repeat = Widget {
            name: "second copy".into(),
            ..widget("1", 1.0)
        };
        let (mock, store) = seeded(vec![widget("1", 1.0), repeat, widget("2", 2.0)]).await;
        assert_eq!(store.snapshot().items, vec![widget("1", 1.0), widget("2", 2.0)]);

        mock.expect_delete("1").return_ok();
        store.remove("1").await.unwrap();

        assert_eq!(store.snapshot().items, vec![widget("2", 2.0)]);
        mock.verify();
    }

    #[tokio::test]
    async fn failed_write_before_any_fetch_stays_idle() {
        let (mock, store) = setup();
        mock.expect_list().return_ok(vec![widget("x", 1.0)]);

        let draft = WidgetDraft {
            name: "gadget".into(),
            price: 1.0,
        };
        let result = store.add(draft).await;

        assert!(matches!(result, Err(SyncError::MalformedId(_))));
        assert_eq!(store.status(), StoreStatus::Idle);
        assert!(store.snapshot().last_error.is_some());
    }

    #[tokio::test]
    async fn pending_is_true_only_while_fetch_is_in_flight() {
        let (mock, store) = setup();
        let gate = Arc::new(Notify::new());
        mock.expect_list()
            .after(gate.clone())
            .return_ok(vec![widget("1", 1.0)]);

        let mut rx = store.subscribe();
        let task = store.dispatch(StoreCommand::FetchAll);

        rx.wait_for(|state| state.pending).await.unwrap();
        assert_eq!(store.status(), StoreStatus::Fetching);

        gate.notify_one();
        task.await.unwrap();

        let state = store.snapshot();
        assert!(!state.pending);
        assert_eq!(state.items.len(), 1);
    }

    #[tokio::test]
    async fn dropped_fetch_still_resets_pending() {
        let (mock, store) = setup();
        let gate = Arc::new(Notify::new());
        mock.expect_list().after(gate).return_ok(vec![]);

        let mut rx = store.subscribe();
        let task = store.dispatch(StoreCommand::FetchAll);
        rx.wait_for(|state| state.pending).await.unwrap();

        task.abort();
        let _ = task.await;

        assert!(!store.snapshot().pending);
    }

    #[tokio::test]
    async fn add_appends_server_copy_with_next_numeric_id() {
        let (mock, store) = seeded(vec![widget("1", 1.0), widget("2", 2.0), widget("5", 5.0)]).await;
        mock.expect_list()
            .return_ok(vec![widget("1", 1.0), widget("2", 2.0), widget("5", 5.0)]);
        mock.expect_create().echo();

        let draft = WidgetDraft {
            name: "gizmo".into(),
            price: 9.5,
        };
        store.add(draft).await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.items.len(), 4);
        let created = state.items.last().unwrap();
        assert_eq!(created.id, "6");
        assert_eq!(created.name, "gizmo");
        assert_eq!(created.price, 9.5);
        assert!(!state.pending);
        mock.verify();
    }

    // Both adds read the list before either creates, so both pick the same id.
    #[tokio::test]
    async fn overlapping_adds_compute_the_same_next_id() {
        let (mock, store) = setup();
        let first = Arc::new(Notify::new());
        let second = Arc::new(Notify::new());
        let listed = vec![widget("1", 1.0), widget("2", 2.0), widget("5", 5.0)];
        mock.expect_list().after(first.clone()).return_ok(listed.clone());
        mock.expect_list().after(second.clone()).return_ok(listed);
        mock.expect_create().echo();
        mock.expect_create().echo();

        let draft = |name: &str| WidgetDraft {
            name: name.into(),
            price: 6.0,
        };
        let release = async {
            first.notify_one();
            second.notify_one();
        };
        let (a, b, ()) = tokio::join!(store.add(draft("a")), store.add(draft("b")), release);
        a.unwrap();
        b.unwrap();

        let calls = mock.calls();
        assert!(matches!(calls.as_slice(), [Call::List, Call::List, ..]));
        let created: Vec<(String, String)> = calls
            .into_iter()
            .filter_map(|call| match call {
                Call::Create(w) => Some((w.id, w.name)),
                _ => None,
            })
            .collect();
        assert_eq!(
            created,
            vec![("6".to_string(), "a".to_string()), ("6".to_string(), "b".to_string())]
        );

        // the second reply replaces the first locally
        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "b");
        mock.verify();
    }

    #[tokio::test]
    async fn add_uses_server_returned_record() {
        let (mock, store) = seeded(vec![]).await;
        mock.expect_list().return_ok(vec![]);
        let canonical = Widget {
            id: "1".into(),
            name: "Gizmo (normalized)".into(),
            price: 3.0,
        };
        mock.expect_create().return_ok(canonical.clone());

        store
            .add(WidgetDraft {
                name: "gizmo".into(),
                price: 3.0,
            })
            .await
            .unwrap();

        assert_eq!(store.snapshot().items, vec![canonical]);
        match &mock.calls()[2] {
            Call::Create(sent) => assert_eq!(sent.id, "1"),
            other => panic!("Expected create, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn add_fails_on_non_numeric_existing_id() {
        let (mock, store) = seeded(vec![widget("1", 1.0)]).await;
        mock.expect_list()
            .return_ok(vec![widget("1", 1.0), widget("x9", 2.0)]);

        let result = store
            .add(WidgetDraft {
                name: "gizmo".into(),
                price: 1.0,
            })
            .await;

        assert_eq!(result, Err(SyncError::MalformedId("x9".into())));
        let state = store.snapshot();
        assert_eq!(state.items, vec![widget("1", 1.0)]);
        assert!(state.last_error.is_some());
        mock.verify();
    }

    #[tokio::test]
    async fn rejected_draft_sends_nothing() {
        let (mock, store) = seeded(vec![widget("1", 1.0)]).await;

        let result = store
            .add(WidgetDraft {
                name: "   ".into(),
                price: 1.0,
            })
            .await;

        assert!(matches!(result, Err(SyncError::Validation(_))));
        assert_eq!(mock.calls().len(), 1);
        assert_eq!(store.snapshot().items, vec![widget("1", 1.0)]);
        assert!(store.snapshot().last_error.is_some());
    }

    #[tokio::test]
    async fn failed_create_leaves_items_unchanged() {
        let (mock, store) = seeded(vec![widget("1", 1.0)]).await;
        mock.expect_list().return_ok(vec![widget("1", 1.0)]);
        mock.expect_create().return_err(SyncError::Status {
            status: 500,
            message: "boom".into(),
        });

        let result = store
            .add(WidgetDraft {
                name: "gizmo".into(),
                price: 1.0,
            })
            .await;

        assert!(result.is_err());
        let state = store.snapshot();
        assert_eq!(state.items, vec![widget("1", 1.0)]);
        assert_eq!(
            state.last_error.as_deref(),
            Some("Request failed with status code 500: boom")
        );
    }

    #[tokio::test]
    async fn update_replaces_only_the_matching_entry() {
        let (mock, store) = seeded(vec![widget("1", 1.0), widget("2", 2.0), widget("3", 3.0)]).await;
        let server_copy = Widget {
            id: "2".into(),
            name: "renamed".into(),
            price: 2.0,
        };
        mock.expect_update("2").return_ok(server_copy.clone());

        let patch = WidgetPatch {
            name: Some("renamed".into()),
            price: None,
        };
        store.update("2", patch).await.unwrap();

        assert_eq!(
            store.snapshot().items,
            vec![widget("1", 1.0), server_copy, widget("3", 3.0)]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn update_reply_for_another_id_is_rejected() {
        let (mock, store) = seeded(vec![widget("1", 1.0), widget("2", 2.0)]).await;
        mock.expect_update("1").return_ok(widget("2", 9.0));

        let patch = WidgetPatch {
            name: None,
            price: Some(9.0),
        };
        let result = store.update("1", patch).await;

        assert_eq!(
            result,
            Err(SyncError::IdMismatch {
                requested: "1".into(),
                returned: "2".into(),
            })
        );
        let state = store.snapshot();
        assert_eq!(state.items, vec![widget("1", 1.0), widget("2", 2.0)]);
        assert!(state.last_error.is_some());
        mock.verify();
    }

    #[tokio::test]
    async fn failed_update_leaves_items_unchanged() {
        let (mock, store) = seeded(vec![widget("1", 1.0)]).await;
        mock.expect_update("1").return_err(SyncError::Status {
            status: 404,
            message: "Not Found".into(),
        });

        let patch = WidgetPatch {
            name: None,
            price: Some(4.0),
        };
        assert!(store.update("1", patch).await.is_err());

        let state = store.snapshot();
        assert_eq!(state.items, vec![widget("1", 1.0)]);
        assert!(state.last_error.is_some());
    }

    #[tokio::test]
    async fn remove_filters_out_the_entry() {
        let (mock, store) = seeded(vec![widget("1", 1.0), widget("2", 2.0)]).await;
        mock.expect_delete("1").return_ok();

        store.remove("1").await.unwrap();

        assert_eq!(store.snapshot().items, vec![widget("2", 2.0)]);
        assert!(store.get("1").is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn failed_remove_keeps_the_entry_and_error_survives_writes() {
        let (mock, store) = seeded(vec![widget("1", 1.0)]).await;
        mock.expect_delete("1")
            .return_err(SyncError::Transport("reset".into()));
        mock.expect_delete("1").return_ok();

        assert!(store.remove("1").await.is_err());
        assert_eq!(store.snapshot().items.len(), 1);

        store.remove("1").await.unwrap();
        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.last_error.as_deref(), Some("Network error: reset"));
    }

    #[tokio::test]
    async fn dispatch_runs_command_in_background() {
        let (mock, store) = seeded(vec![widget("1", 1.0)]).await;
        mock.expect_delete("1").return_ok();

        store
            .dispatch(StoreCommand::Remove { id: "1".into() })
            .await
            .unwrap();

        assert!(store.snapshot().items.is_empty());
    }
}
