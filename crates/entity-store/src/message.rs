//! # Store Messages
//!
//! This module defines the message types used for communication between a
//! [`StoreClient`](crate::StoreClient) and its [`EntityStore`](crate::EntityStore).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store to request operations.
///
/// # Resource-Oriented Design
/// Each store manages one kind of resource (the [`StoreEntity`]), and instead
/// of ad-hoc messages per call site we standardize on the lifecycle
/// operations every persisted resource needs:
///
/// - **Insert**: lifecycle start. Takes a [`StoreEntity::Create`] candidate,
///   answers with the full record including its assigned id.
/// - **Find / FindRandom / List / Count**: retrieval. Absence is answered
///   with `None` or an empty page, never an error.
/// - **Update**: state mutation. Takes a full record carrying an existing id
///   and replaces every mutable field of the match.
/// - **Delete**: lifecycle end. Answers whether a record was actually
///   removed, so deleting a missing id is not an error.
///
/// # Entity Interaction
/// The enum is generic over `T: StoreEntity` and uses the trait's associated
/// types, which guarantees you cannot send a "Hero insert" payload to a
/// "Villain" store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Insert {
        candidate: T::Create,
        respond_to: Response<T>,
    },
    Find {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindRandom {
        respond_to: Response<Option<T>>,
    },
    List {
        page: usize,
        page_size: usize,
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Update {
        candidate: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
}
