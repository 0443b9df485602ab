//! # Resource Actor
//!
//! This crate provides the building blocks for an in-memory resource store:
//! an ordered collection of records with store-assigned identifiers, wrapped
//! in an actor so that every mutation is serialized through a single message
//! loop.
//!
//! ## Why an Actor?
//!
//! The store must guarantee that two concurrent creates never receive the
//! same id and that no reader observes a half-applied mutation. Instead of
//! guarding a shared collection with locks, the store *owns* its state inside
//! a Tokio task and processes requests one at a time:
//!
//! - "compute next id, then append" is a single critical section for free
//! - readers and writers alike go through the same queue, so reads are
//!   always consistent
//! - clients hold only a channel sender and are cheap to clone and share
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Record Layer** ([`Resource`]) - your record type and its field payload
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing and state ownership
//! 3. **Interface Layer** ([`StoreClient`]) - type-safe async communication
//!
//! You describe your record **once** via the [`Resource`] trait and the
//! framework supplies the five store primitives: create, list, get, replace,
//! delete.
//!
//! ## Store Semantics
//!
//! - **Identifier assignment**: ids come from a monotonic counter starting
//!   at 1. The counter never decrements, so an id is never reused, even after
//!   the record it named was deleted. Clients cannot choose ids.
//! - **Ordering**: records are kept in insertion order; `list(offset, limit)`
//!   returns a contiguous slice of that order, and an out-of-range offset
//!   yields an empty page rather than an error.
//! - **Wholesale replacement**: `replace` swaps every field except the id and
//!   keeps the record's position.
//! - **NotFound**: the only domain error the store raises. Payload
//!   validation belongs to the layer above; `create` always succeeds.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{Resource, StoreActor};
//!
//! // 1. Define the record
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: u64, body: String }
//!
//! #[derive(Debug)]
//! struct NoteFields { body: String }
//!
//! impl Resource for Note {
//!     type Id = u64;
//!     type Fields = NoteFields;
//!
//!     fn from_fields(id: u64, fields: NoteFields) -> Self {
//!         Self { id, body: fields.body }
//!     }
//!     fn replace(&mut self, fields: NoteFields) {
//!         self.body = fields.body;
//!     }
//!     fn id(&self) -> &u64 {
//!         &self.id
//!     }
//! }
//!
//! // 2. Use the store
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Note>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let first = client.create(NoteFields { body: "alpha".into() }).await.unwrap();
//!     assert_eq!(first.id, 1);
//!
//!     let replaced = client
//!         .replace(first.id, NoteFields { body: "beta".into() })
//!         .await
//!         .unwrap();
//!     assert_eq!(replaced.body, "beta");
//!
//!     client.delete(first.id).await.unwrap();
//!     assert!(client.get(first.id).await.unwrap().is_none());
//! }
//! ```
//!
//! ## Service Wrappers
//!
//! Resource-specific services wrap a [`StoreClient`] and implement
//! [`StoreAccess`] to inherit `get`/`delete` with their own error mapping;
//! see that trait for the pattern.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that implements the same
//! channel protocol as the real client but replays scripted expectations,
//! so service logic can be unit-tested without spawning any actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreAccess;
pub use entity::Resource;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
