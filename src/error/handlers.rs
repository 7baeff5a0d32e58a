//! Error handlers
//!
//! Classifies and reports resource listing errors.

use crate::error::types::{ErrorKind, ResourceError};
use log::error;

/// Log a resource error
pub fn log_error(err: &ResourceError) {
    error!("Resource listing failed ({}): {}", error_kind(err), err);
}

/// Map an error onto its caller-facing category
pub fn error_kind(err: &ResourceError) -> ErrorKind {
    match err {
        ResourceError::Locate(e) => e.kind(),
        ResourceError::Listing(e) => e.kind(),
    }
}

/// Only I/O failures are worth retrying
pub fn is_retryable(kind: ErrorKind) -> bool {
    kind == ErrorKind::IoFailure
}
