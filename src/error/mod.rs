//! Error handling
//!
//! Defines error types and classification for the resource lister.

pub mod handlers;
pub mod types;

pub use handlers::{error_kind, is_retryable, log_error};
pub use types::*;
