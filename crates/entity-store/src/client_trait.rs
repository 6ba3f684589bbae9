//! # EntityClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default
//! read and delete methods built on top of a generic [`StoreClient`].

use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store
/// operations.
///
/// A concrete client (say, `HeroClient`) wraps a `StoreClient<Hero>`, picks
/// an error type, and says how store errors map into it. In exchange it gets
/// `find`, `find_random`, `list`, `count`, and `delete` for free; only the
/// write paths that need typed payloads (`create_*`, `update_*`) are written
/// by hand.
///
/// # Example
///
/// ```rust
/// use entity_store::{EntityClient, StoreClient, StoreEntity, StoreError, ValidationError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Gadget { id: u64, name: String }
/// #[derive(Debug)]
/// struct GadgetCreate { name: String }
///
/// impl StoreEntity for Gadget {
///     type Id = u64;
///     type Create = GadgetCreate;
///     fn id(&self) -> u64 { self.id }
///     fn from_create(id: u64, candidate: GadgetCreate) -> Self {
///         Self { id, name: candidate.name }
///     }
///     fn validate(&self) -> Result<(), ValidationError> { Ok(()) }
///     fn apply(&mut self, candidate: Self) { self.name = candidate.name; }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("gadget store error: {0}")]
/// struct GadgetError(String);
///
/// struct GadgetClient { inner: StoreClient<Gadget> }
///
/// #[async_trait]
/// impl EntityClient<Gadget> for GadgetClient {
///     type Error = GadgetError;
///
///     fn inner(&self) -> &StoreClient<Gadget> { &self.inner }
///
///     fn map_error(e: StoreError) -> GadgetError { GadgetError(e.to_string()) }
/// }
///
/// async fn usage(client: GadgetClient) {
///     // find(), count() and friends are provided automatically
///     let _ = client.find(1).await;
///     let _ = client.count().await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by id. `None` is the no-content signal for an unknown
    /// id, which may be arbitrary caller-supplied input.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(id).await.map_err(Self::map_error)
    }

    /// Fetch one entity chosen uniformly at random, `None` when the store is
    /// empty.
    #[tracing::instrument(skip(self))]
    async fn find_random(&self) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_random().await.map_err(Self::map_error)
    }

    /// Fetch a page of entities in stable id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, page: usize, page_size: usize) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .list(page, page_size)
            .await
            .map_err(Self::map_error)
    }

    /// Current number of entities.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count().await.map_err(Self::map_error)
    }

    /// Delete an entity by id. Answers whether a record was removed;
    /// deleting an unknown id is not an error.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
