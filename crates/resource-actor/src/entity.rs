//! # Resource Trait
//!
//! The `Resource` trait defines the contract a record type must satisfy to be
//! managed by the generic [`StoreActor`](crate::StoreActor). It specifies the
//! identifier type, the field payload used for construction and wholesale
//! replacement, and the accessor the store needs for linear lookup.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract (`Resource`) that every record type must satisfy,
//! we can write the `StoreActor` logic *once* and reuse it for any resource.
//!
//! We use "Associated Types" (`type Id`, `type Fields`) to enforce type
//! safety: a `Todo` store only accepts `TodoFields`, and the compiler rejects
//! anything else.
//!
//! # Design Note: No Validation Here
//! The store is deliberately schema-agnostic. `from_fields` is infallible:
//! by the time a payload reaches the store it has already been validated by
//! the service layer, so construction cannot fail and `Create` always
//! succeeds.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `StoreActor`.
///
/// Records are owned by the store as an ordered sequence; the store assigns
/// identifiers itself (via `From<u64>`) and looks records up linearly through
/// [`Resource::id`].
pub trait Resource: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u64` so the store can assign ids from its
    /// monotonic counter.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The validated field payload used both to create a record and to
    /// replace an existing one wholesale.
    type Fields: Send + Sync + Debug;

    /// Construct the full record from a store-assigned id and its fields.
    fn from_fields(id: Self::Id, fields: Self::Fields) -> Self;

    /// Replace every field except the id. The record keeps its position in
    /// iteration order.
    fn replace(&mut self, fields: Self::Fields);

    /// The record's identifier, used for linear lookup.
    fn id(&self) -> &Self::Id;
}
