//! # Mock Store & Testing Guide
//!
//! The [`MockStore`] type answers through the same [`StoreClient`] API as a
//! real store but operates entirely in-memory from a queue of expectations.
//! It lets you write fast, deterministic unit tests for client logic without
//! spawning any store task.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real Store |
//! |---------|-----------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% deterministic | Subject to scheduler and RNG |
//! | **State** | No real state (expectations) | Real record map |
//! | **Use case** | Unit testing logic *around* the client | Testing the store itself or full system |
//! | **Error injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! Random selection is the standout case: against a real store a
//! `find_random` answer depends on the RNG, while a mock pins the exact
//! entity the caller will see.
//!
//! ```rust
//! use entity_store::mock::MockStore;
//! use entity_store::{StoreEntity, ValidationError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Gadget { id: u64, name: String }
//! #[derive(Debug)]
//! struct GadgetCreate { name: String }
//!
//! impl StoreEntity for Gadget {
//!     type Id = u64;
//!     type Create = GadgetCreate;
//!     fn id(&self) -> u64 { self.id }
//!     fn from_create(id: u64, candidate: GadgetCreate) -> Self {
//!         Self { id, name: candidate.name }
//!     }
//!     fn validate(&self) -> Result<(), ValidationError> { Ok(()) }
//!     fn apply(&mut self, candidate: Self) { self.name = candidate.name; }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Gadget>::new();
//!     mock.expect_find_random()
//!         .return_ok(Some(Gadget { id: 7, name: "Widget".into() }));
//!
//!     let client = mock.client();
//!     let picked = client.find_random().await.unwrap().unwrap();
//!     assert_eq!(picked.id, 7);
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the raw requests a client sends, use
//! [`create_mock_client`] and the `expect_*` receiver helpers instead of the
//! fluent API.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
enum Expectation<T: StoreEntity> {
    Insert {
        response: Result<T, StoreError>,
    },
    Find {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    FindRandom {
        response: Result<Option<T>, StoreError>,
    },
    Count {
        response: Result<usize, StoreError>,
    },
    Update {
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<bool, StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Hero>::new();
/// mock.expect_find(HeroId(1)).return_ok(Some(hero));
/// mock.expect_find_random().return_ok(None);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Insert {
                            candidate: _,
                            respond_to,
                        },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Find { id: _, respond_to },
                        Some(Expectation::Find { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindRandom { respond_to },
                        Some(Expectation::FindRandom { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Count { respond_to },
                        Some(Expectation::Count { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update {
                            candidate: _,
                            respond_to,
                        },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects an `insert` operation.
    pub fn expect_insert(&mut self) -> InsertExpectationBuilder<T> {
        InsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self, id: T::Id) -> FindExpectationBuilder<T> {
        FindExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find_random` operation.
    pub fn expect_find_random(&mut self) -> FindRandomExpectationBuilder<T> {
        FindRandomExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `count` operation.
    pub fn expect_count(&mut self) -> CountExpectationBuilder<T> {
        CountExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> InsertExpectationBuilder<T> {
    pub fn return_ok(self, created: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert {
                response: Ok(created),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert {
                response: Err(error),
            });
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> FindExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                id: self.id,
                response: Ok(value),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `find_random` expectations.
pub struct FindRandomExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> FindRandomExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindRandom {
                response: Ok(value),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindRandom {
                response: Err(error),
            });
    }
}

/// Builder for `count` expectations.
pub struct CountExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> CountExpectationBuilder<T> {
    pub fn return_ok(self, count: usize) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Count {
                response: Ok(count),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Count {
                response: Err(error),
            });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, updated: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                response: Ok(updated),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                response: Err(error),
            });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self, removed: bool) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Ok(removed),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When the test subject is the *client* logic, we don't want a full
/// `EntityStore` behind it. This client sends messages to a channel we
/// control, so the test can inspect each request and script the answer
/// (success, failure, absence) deterministically.
///
/// **Note**: consider [`MockStore`] for a more fluent API.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Insert request.
pub async fn expect_insert<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert {
            candidate,
            respond_to,
        }) => Some((candidate, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request.
pub async fn expect_find<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Find { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindRandom request.
pub async fn expect_find_random<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::FindRandom { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Count request.
pub async fn expect_count<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<usize, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Count { respond_to }) => Some(respond_to),
        _ => None,
    }
}
