//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract that every resource (Hero,
//! Villain, Fight, ...) must implement to be managed by the generic
//! [`EntityStore`](crate::EntityStore). It specifies the id and candidate
//! types, how a candidate becomes a full record, which constraints must hold
//! before a record is persisted, and how an update replaces the mutable
//! fields of an existing record.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining one contract that all our resource types satisfy, we write the
//! store loop *once* and reuse it everywhere. Associated types keep the API
//! type-safe: a Hero store accepts a `HeroCreate` payload, and the compiler
//! rejects a `VillainCreate` sent to it.

use crate::validate::ValidationError;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by an
/// [`EntityStore`](crate::EntityStore).
///
/// # Id Discipline
/// Ids are assigned by the store from a monotonic counter, so the id type
/// must be convertible from `u64`. The `Ord` bound gives the record map a
/// stable iteration order (ascending id), which is what makes pagination and
/// random selection deterministic relative to the store's contents.
///
/// # Validation
/// [`validate`](StoreEntity::validate) runs before a record is persisted, on
/// insert and on update alike. A violation rejects the whole write; the
/// store never persists a partially constructed record.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Assigned once on insert,
    /// immutable afterwards, never reused after deletion.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The candidate payload for creating a new record (everything but the id).
    type Create: Send + Sync + Debug;

    /// The id this record carries.
    fn id(&self) -> Self::Id;

    /// Construct the full record from the assigned id and the candidate.
    fn from_create(id: Self::Id, candidate: Self::Create) -> Self;

    /// Check field constraints. Violations reject the write and are reported
    /// to the caller with the offending field and rule.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Replace all mutable fields from `candidate`, keeping the stored id.
    /// Called only after `candidate` passed validation.
    fn apply(&mut self, candidate: Self);
}
