//! # Store Messages
//!
//! This module defines the generic message types used for communication
//! between the `StoreClient` and `StoreActor`.

use crate::entity::Resource;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor to request operations.
///
/// The variants map directly onto the store's five primitives. Each carries
/// a `respond_to` channel; the actor answers exactly once per request.
///
/// This type is generic over `T: Resource` and uses the associated types of
/// the [`Resource`] trait (`Id`, `Fields`) so a request for one record type
/// can never be sent to a store of another.
#[derive(Debug)]
pub enum StoreRequest<T: Resource> {
    /// Append a new record with a freshly assigned id. Always succeeds;
    /// responds with the full record including its id.
    Create {
        fields: T::Fields,
        respond_to: Response<T>,
    },
    /// Contiguous slice of the ordered collection. An out-of-range offset
    /// yields an empty sequence, not an error.
    List {
        offset: usize,
        limit: usize,
        respond_to: Response<Vec<T>>,
    },
    /// Linear lookup by id. Responds with `None` when absent.
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Replace all fields of the matching record except its id, preserving
    /// its position in iteration order.
    Replace {
        id: T::Id,
        fields: T::Fields,
        respond_to: Response<T>,
    },
    /// Remove the matching record. Remaining ids are never renumbered.
    Delete { id: T::Id, respond_to: Response<()> },
}
