//! Data types for the Todo resource.

pub mod todo;

pub use todo::*;
