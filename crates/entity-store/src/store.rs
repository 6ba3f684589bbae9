//! # Generic Store Actor
//!
//! This module defines the `EntityStore`, the core component that owns the
//! records of one entity type. It implements the "server" side of the actor
//! pair, processing messages sequentially and ensuring exclusive access to
//! the record map.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use rand::Rng;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of the store. It owns the state
/// (`records`) and the receiver end of the channel.
///
/// **Concurrency model**: every store processes its own messages
/// *sequentially* in a loop, so the record map needs no `Mutex` or `RwLock`.
/// A write that completes before another request is handled is visible to
/// that request, which is exactly the read-after-write guarantee callers
/// rely on for `count` and `find` after an `insert`.
///
/// **Ordering**: records live in a `BTreeMap` keyed by id, so listing and
/// random selection see a stable ascending-id order. Pagination slices that
/// order; random selection draws a uniform index into it.
///
/// **Id discipline**: ids come from a monotonic `u64` counter starting at 1.
/// The counter only moves forward, so an id is never reused, not even after
/// the record it named was deleted.
///
/// # Operations
///
/// * **Insert**: builds the record via [`StoreEntity::from_create`],
///   validates it, and only then assigns the id permanently and stores the
///   record. A validation failure rejects the write and burns nothing.
/// * **Find**: answers a clone of the record, or `None`.
/// * **FindRandom**: `None` on an empty store; otherwise draws an index
///   uniformly in `[0, count)` and walks the ordered records to it. A store
///   of size 1 always answers its single record.
/// * **List**: zero-based page of `page_size` records in id order.
///   Out-of-range pages answer an empty vec, never an error.
/// * **Count**: current number of records.
/// * **Update**: validates the candidate like an insert, then replaces all
///   mutable fields of the record matching the candidate's id via
///   [`StoreEntity::apply`]. Answers `NotFound` when no record matches.
/// * **Delete**: removes the match if present and answers whether anything
///   was removed. Idempotent.
pub struct EntityStore<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: BTreeMap<T::Id, T>,
    next_id: u64,
}

impl<T: StoreEntity> EntityStore<T> {
    /// Creates a new `EntityStore` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - capacity of the mpsc channel. When the channel is
    ///   full, client calls wait until there is space (backpressure).
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `EntityStore` instance (the server), which must be driven via
    ///    [`run`](EntityStore::run).
    /// 2. The `StoreClient`, which can be cloned and shared freely.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            records: BTreeMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (store, client)
    }

    /// Runs the store's event loop, processing messages until the channel
    /// closes (every client dropped).
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Hero" instead of "superheroes::model::hero::Hero")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert {
                    candidate,
                    respond_to,
                } => {
                    debug!(entity_type, ?candidate, "Insert");
                    let id = T::Id::from(self.next_id);
                    let item = T::from_create(id.clone(), candidate);
                    match item.validate() {
                        Ok(()) => {
                            self.next_id += 1;
                            self.records.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.records.len(), "Inserted");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Insert rejected");
                            let _ = respond_to.send(Err(StoreError::Validation(e)));
                        }
                    }
                }
                StoreRequest::Find { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Find");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::FindRandom { respond_to } => {
                    let item = if self.records.is_empty() {
                        None
                    } else {
                        let index = rand::rng().random_range(0..self.records.len());
                        self.records.values().nth(index).cloned()
                    };
                    debug!(entity_type, found = item.is_some(), "FindRandom");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List {
                    page,
                    page_size,
                    respond_to,
                } => {
                    // checked_mul keeps absurd page indexes from panicking;
                    // they fall through to the empty page like any other
                    // out-of-range request.
                    let items: Vec<T> = match page.checked_mul(page_size) {
                        Some(skip) if page_size > 0 => self
                            .records
                            .values()
                            .skip(skip)
                            .take(page_size)
                            .cloned()
                            .collect(),
                        _ => Vec::new(),
                    };
                    debug!(entity_type, page, page_size, returned = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Count { respond_to } => {
                    debug!(entity_type, size = self.records.len(), "Count");
                    let _ = respond_to.send(Ok(self.records.len()));
                }
                StoreRequest::Update {
                    candidate,
                    respond_to,
                } => {
                    let id = candidate.id();
                    debug!(entity_type, %id, "Update");
                    match candidate.validate() {
                        Ok(()) => {
                            if let Some(item) = self.records.get_mut(&id) {
                                item.apply(candidate);
                                info!(entity_type, %id, "Updated");
                                let _ = respond_to.send(Ok(item.clone()));
                            } else {
                                warn!(entity_type, %id, "Not found");
                                let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                            }
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update rejected");
                            let _ = respond_to.send(Err(StoreError::Validation(e)));
                        }
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    let removed = self.records.remove(&id).is_some();
                    if removed {
                        info!(entity_type, %id, size = self.records.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete ignored, not found");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}
