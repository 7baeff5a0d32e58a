//! Resource Lister
//!
//! Lists the immediate children of a resource folder bundled with an
//! application, whether the folder is a plain directory or a prefix inside a
//! packaged ZIP/JAR archive.

pub mod archive;
pub mod config;
pub mod error;
pub mod listing;
pub mod location;
pub mod locator;
pub mod utils;

pub use crate::config::ClassPathConfig;
pub use error::{ErrorKind, ListingError, LocateError, ResourceError};
pub use listing::{ListingResult, list, list_async, list_with_timeout};
pub use location::Location;
pub use locator::{
    ClassPath, ClassPathEntry, ResourceLoader, list_resources, list_resources_with_anchor, locate,
    locate_with_anchor,
};
