//! Storage contract shared by every resource.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Resource;

/// Async storage for one kind of [`Resource`].
///
/// Ids are assigned by the store on creation and never reused. Lookups by
/// id report a missing record as `NotFound`; lookups by key return `None`.
#[async_trait]
pub trait ResourceRepository<E: Resource>: Send + Sync {
    /// Returns every stored record ordered by id.
    async fn get_all(&self) -> AppResult<Vec<E>>;

    async fn get_by_id(&self, id: i32) -> AppResult<E>;

    async fn get_by_key(&self, key: &E::Key) -> AppResult<Option<E>>;

    /// Stores a new record and returns it with its assigned id.
    async fn create(&self, new: E::New) -> AppResult<E>;

    /// Replaces every non-id field of the record with the same id.
    async fn update(&self, entity: E) -> AppResult<E>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}
