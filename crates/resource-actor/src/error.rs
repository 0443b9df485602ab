//! # Store Errors
//!
//! This module defines the common error types used throughout the store
//! actor. By centralizing error definitions, we ensure consistent error
//! handling across all stores and clients.

/// Errors that can occur within the store actor itself.
///
/// `NotFound` is the only domain error the store raises; it is a definitive
/// statement about store contents at the time of the call, never retried.
/// The other variants signal channel failures between client and actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
}
