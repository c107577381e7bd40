//! Error handling
//!
//! Defines the error type shared by every file manager operation.

pub mod handlers;
pub mod types;

pub use types::*;
