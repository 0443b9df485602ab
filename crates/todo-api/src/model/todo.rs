use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Todos.
///
/// Serialized transparently as a bare positive integer, so a rendered record
/// reads `{"id": 1, ...}` and error details read "Todo 1 not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single Todo record.
///
/// # Store
/// This struct implements the [`Resource`](resource_actor::Resource) trait
/// (see [`crate::todo_actor::entity`]), allowing it to be managed by a
/// [`StoreActor`](resource_actor::StoreActor). The `id` is assigned by the
/// store and never taken from a client payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub is_done: bool,
}

/// The validated field payload for a Todo.
///
/// Used both to create a record and to replace an existing one wholesale;
/// produced only by schema validation (see [`crate::schema`]), never
/// deserialized directly from client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub text: String,
    pub is_done: bool,
}
