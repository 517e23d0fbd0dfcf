//! # Mock Collection & Testing Guide
//!
//! [`MockCollection<T>`] implements [`RemoteCollection<T>`] entirely in memory. You queue up
//! the replies you expect the backend to give, hand the mock to a store, and afterwards
//! inspect the journal of requests the store actually sent.
//!
//! ## When to use the Mock vs a Real Backend
//!
//! | Feature | MockCollection | HttpCollection + test server |
//! |---------|----------------|------------------------------|
//! | **Speed** | Instant (in-memory) | Fast (loopback socket) |
//! | **Determinism** | Fully scripted | Subject to the server's logic |
//! | **Error Injection** | Easy (`return_err`) | Needs a misbehaving route |
//! | **Use Case** | Store reconciliation rules | Wire format, status handling |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mock = Arc::new(MockCollection::<Product>::new());
//! mock.expect_list().return_ok(vec![product("1"), product("2")]);
//!
//! let store = ResourceStore::new(mock.clone());
//! store.fetch_all().await.unwrap();
//!
//! assert_eq!(store.snapshot().items.len(), 2);
//! mock.verify();
//! ```
//!
//! ## Holding a Reply
//!
//! To observe in-flight state (e.g. `pending`), gate a reply on a [`Notify`]:
//!
//! ```rust,ignore
//! let gate = Arc::new(Notify::new());
//! mock.expect_list().after(gate.clone()).return_ok(vec![]);
//! let task = store.dispatch(StoreCommand::FetchAll);
//! // ... assert store.snapshot().pending ...
//! gate.notify_one();
//! ```

use crate::entity::RemoteEntity;
use crate::error::SyncError;
use crate::remote::RemoteCollection;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A request received by the mock, in arrival order.
#[derive(Debug, Clone)]
pub enum Call<T: RemoteEntity> {
    List,
    Create(T),
    Update { id: String, patch: T::Patch },
    Delete(String),
}

enum Reply<T: RemoteEntity> {
    List(Result<Vec<T>, SyncError>),
    Create(Option<Result<T, SyncError>>),
    Update {
        id: String,
        response: Result<T, SyncError>,
    },
    Delete {
        id: String,
        response: Result<(), SyncError>,
    },
}

struct Expectation<T: RemoteEntity> {
    reply: Reply<T>,
    gate: Option<Arc<Notify>>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Scripted in-memory [`RemoteCollection`].
pub struct MockCollection<T: RemoteEntity> {
    expectations: Queue<T>,
    journal: Mutex<Vec<Call<T>>>,
}

impl<T: RemoteEntity> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteEntity> MockCollection<T> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            journal: Mutex::new(Vec::new()),
        }
    }

    /// Expects a `list` request.
    pub fn expect_list(&self) -> ListExpectation<T> {
        ListExpectation {
            queue: self.expectations.clone(),
            gate: None,
        }
    }

    /// Expects a `create` request.
    pub fn expect_create(&self) -> CreateExpectation<T> {
        CreateExpectation {
            queue: self.expectations.clone(),
            gate: None,
        }
    }

    /// Expects an `update` request for `id`.
    pub fn expect_update(&self, id: impl Into<String>) -> UpdateExpectation<T> {
        UpdateExpectation {
            id: id.into(),
            queue: self.expectations.clone(),
            gate: None,
        }
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&self, id: impl Into<String>) -> DeleteExpectation<T> {
        DeleteExpectation {
            id: id.into(),
            queue: self.expectations.clone(),
            gate: None,
        }
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<Call<T>> {
        self.journal.lock().unwrap().clone()
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    async fn next(&self, call: Call<T>) -> Reply<T> {
        self.journal.lock().unwrap().push(call);
        let expectation = self
            .expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected request: no expectation queued"));
        if let Some(gate) = expectation.gate {
            gate.notified().await;
        }
        expectation.reply
    }
}

#[async_trait]
impl<T: RemoteEntity> RemoteCollection<T> for MockCollection<T> {
    async fn list(&self) -> Result<Vec<T>, SyncError> {
        match self.next(Call::List).await {
            Reply::List(response) => response,
            _ => panic!("Expectation mismatch: got list"),
        }
    }

    async fn create(&self, record: &T) -> Result<T, SyncError> {
        match self.next(Call::Create(record.clone())).await {
            Reply::Create(Some(response)) => response,
            Reply::Create(None) => Ok(record.clone()),
            _ => panic!("Expectation mismatch: got create"),
        }
    }

    async fn update(&self, id: &str, patch: &T::Patch) -> Result<T, SyncError> {
        let call = Call::Update {
            id: id.to_string(),
            patch: patch.clone(),
        };
        match self.next(call).await {
            Reply::Update { id: expected, response } => {
                assert_eq!(expected, id, "update sent for unexpected id");
                response
            }
            _ => panic!("Expectation mismatch: got update"),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        match self.next(Call::Delete(id.to_string())).await {
            Reply::Delete { id: expected, response } => {
                assert_eq!(expected, id, "delete sent for unexpected id");
                response
            }
            _ => panic!("Expectation mismatch: got delete"),
        }
    }
}

fn push<T: RemoteEntity>(queue: &Queue<T>, reply: Reply<T>, gate: Option<Arc<Notify>>) {
    queue.lock().unwrap().push_back(Expectation { reply, gate });
}

/// Builder for `list` expectations.
pub struct ListExpectation<T: RemoteEntity> {
    queue: Queue<T>,
    gate: Option<Arc<Notify>>,
}

impl<T: RemoteEntity> ListExpectation<T> {
    /// Holds the reply until `gate` is notified.
    pub fn after(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self, items: Vec<T>) {
        push(&self.queue, Reply::List(Ok(items)), self.gate);
    }

    pub fn return_err(self, error: SyncError) {
        push(&self.queue, Reply::List(Err(error)), self.gate);
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<T: RemoteEntity> {
    queue: Queue<T>,
    gate: Option<Arc<Notify>>,
}

impl<T: RemoteEntity> CreateExpectation<T> {
    /// Holds the reply until `gate` is notified.
    pub fn after(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Replies with exactly the record that was submitted.
    pub fn echo(self) {
        push(&self.queue, Reply::Create(None), self.gate);
    }

    pub fn return_ok(self, item: T) {
        push(&self.queue, Reply::Create(Some(Ok(item))), self.gate);
    }

    pub fn return_err(self, error: SyncError) {
        push(&self.queue, Reply::Create(Some(Err(error))), self.gate);
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectation<T: RemoteEntity> {
    id: String,
    queue: Queue<T>,
    gate: Option<Arc<Notify>>,
}

impl<T: RemoteEntity> UpdateExpectation<T> {
    /// Holds the reply until `gate` is notified.
    pub fn after(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self, item: T) {
        let reply = Reply::Update {
            id: self.id,
            response: Ok(item),
        };
        push(&self.queue, reply, self.gate);
    }

    pub fn return_err(self, error: SyncError) {
        let reply = Reply::Update {
            id: self.id,
            response: Err(error),
        };
        push(&self.queue, reply, self.gate);
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectation<T: RemoteEntity> {
    id: String,
    queue: Queue<T>,
    gate: Option<Arc<Notify>>,
}

impl<T: RemoteEntity> DeleteExpectation<T> {
    /// Holds the reply until `gate` is notified.
    pub fn after(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self) {
        let reply = Reply::Delete {
            id: self.id,
            response: Ok(()),
        };
        push(&self.queue, reply, self.gate);
    }

    pub fn return_err(self, error: SyncError) {
        let reply = Reply::Delete {
            id: self.id,
            response: Err(error),
        };
        push(&self.queue, reply, self.gate);
    }
}
