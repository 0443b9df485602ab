//! # StoreAccess Trait
//!
//! Provides a common interface for resource-specific service wrappers,
//! adding default `get` and `delete` methods built on top of a generic
//! `StoreClient`.

use crate::{Resource, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific service wrappers to inherit standard store
/// operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations whose shape is identical across resources (`get` and
/// `delete`), while letting each wrapper define its own error type and
/// mapping from [`StoreError`].
///
/// # Example
///
/// ```rust
/// use resource_actor::{Resource, StoreAccess, StoreClient, StoreError};
/// use async_trait::async_trait;
///
/// // 1. Define the record
/// #[derive(Clone, Debug)]
/// struct Note { id: u64, body: String }
/// #[derive(Debug)] struct NoteFields { body: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error: {0}")]
/// struct NoteError(String);
///
/// impl From<String> for NoteError {
///     fn from(s: String) -> Self { NoteError(s) }
/// }
///
/// impl Resource for Note {
///     type Id = u64;
///     type Fields = NoteFields;
///     fn from_fields(id: u64, fields: NoteFields) -> Self {
///         Self { id, body: fields.body }
///     }
///     fn replace(&mut self, fields: NoteFields) { self.body = fields.body; }
///     fn id(&self) -> &u64 { &self.id }
/// }
///
/// // 2. Define the service wrapper
/// struct NoteService { inner: StoreClient<Note> }
///
/// // 3. Implement StoreAccess
/// #[async_trait]
/// impl StoreAccess<Note> for NoteService {
///     type Error = NoteError;
///
///     fn inner(&self) -> &StoreClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// // 4. Usage: get() and delete() are provided automatically
/// async fn usage(service: NoteService) {
///     let _ = service.get(1).await;
///     let _ = service.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait StoreAccess<T: Resource>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
