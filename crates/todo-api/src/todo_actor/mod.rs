//! # Todo Store Actor
//!
//! This module wires the [`Todo`] record into the generic store actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](resource_actor::Resource) implementation for [`Todo`]
//! - [`error`] - [`TodoError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and store client
//!
//! ## Usage
//!
//! ```rust
//! use todo_api::service::TodoService;
//! use todo_api::todo_actor;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, store_client) = todo_actor::new();
//!     let todos = TodoService::new(store_client);
//!
//!     // Start the actor
//!     tokio::spawn(actor.run());
//!
//!     // Create a todo
//!     let created = todos.create_todo(&json!({"text": "Buy milk"})).await?;
//!     assert_eq!(created.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Todo;
use resource_actor::{StoreActor, StoreClient};

/// Creates a new Todo store actor and its client.
pub fn new() -> (StoreActor<Todo>, StoreClient<Todo>) {
    StoreActor::new(32)
}
