//! # System Lifecycle
//!
//! Orchestration layer: starts the store actor, hands out the service, and
//! coordinates graceful shutdown.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the service** - closes the sender side of the store channel
//! 2. **The actor detects closure** - `receiver.recv()` returns `None`
//! 3. **The actor cleans up** - processes remaining messages, logs final state
//! 4. **Await completion** - wait for the actor task to finish
//!
//! This ensures no in-flight request is lost and the actor terminates cleanly.

pub mod todo_system;

pub use todo_system::*;
