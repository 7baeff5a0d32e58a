//! Listing engine
//!
//! Produces the set of immediate child names of a resource folder.

pub mod operations;
pub mod results;
pub mod task;

pub use operations::{collect_children, immediate_child, list};
pub use results::ListingResult;
pub use task::{list_async, list_with_timeout};
