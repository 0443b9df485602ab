//! # Todo API
//!
//! An in-memory todo resource service built on the generic
//! [`resource_actor`] store.
//!
//! ## Modules
//!
//! - **[model]**: Data types ([`Todo`](model::Todo), [`TodoId`](model::TodoId),
//!   [`TodoFields`](model::TodoFields)).
//! - **[schema]**: Declarative payload validation — presence, type, and
//!   defaults, with every violation collected for field-level error detail.
//! - **[todo_actor]**: Store wiring — the [`Resource`](resource_actor::Resource)
//!   impl for `Todo`, the error taxonomy, and the actor factory.
//! - **[service]**: [`TodoService`](service::TodoService), the validation and
//!   orchestration layer between a parsed request and the store.
//! - **[lifecycle]**: [`TodoSystem`](lifecycle::TodoSystem), which spawns the
//!   actor and coordinates graceful shutdown.
//!
//! ## Error Protocol
//!
//! Every operation returns `Result<_, TodoError>` with two domain outcomes:
//! `ValidationFailed` (malformed payload or pagination, with per-field
//! detail) and `NotFound` (the id names no record, with the id in the
//! message). A transport layer maps these onto its wire format via
//! [`TodoError::http_status`](todo_actor::TodoError::http_status).

pub mod lifecycle;
pub mod model;
pub mod schema;
pub mod service;
pub mod todo_actor;
