//! Resource trait implementation for the Todo record.
//!
//! This enables [`Todo`] to be managed by the generic
//! [`StoreActor`](resource_actor::StoreActor): the store assigns the id and
//! drives construction and wholesale replacement through this impl.

use crate::model::{Todo, TodoFields, TodoId};
use resource_actor::Resource;

impl Resource for Todo {
    type Id = TodoId;
    type Fields = TodoFields;

    /// Builds the full record from a store-assigned id and validated fields.
    fn from_fields(id: TodoId, fields: TodoFields) -> Self {
        Self {
            id,
            text: fields.text,
            is_done: fields.is_done,
        }
    }

    /// Replaces `text` and `is_done` wholesale; the id is immutable.
    fn replace(&mut self, fields: TodoFields) {
        self.text = fields.text;
        self.is_done = fields.is_done;
    }

    fn id(&self) -> &TodoId {
        &self.id
    }
}
