//! Logging utilities
//!
//! Provides logging setup for hosts and tests.

use env_logger;

/// Setup logging from `RUST_LOG`; repeated calls are no-ops
pub fn setup_logging() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
