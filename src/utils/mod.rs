//! Utility functions
//!
//! Provides logging setup and path validation.

pub mod logging;
pub mod validation;

pub use logging::setup_logging;
pub use validation::{folder_path, is_entry_name};
