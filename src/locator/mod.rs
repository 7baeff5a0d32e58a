//! Resource locator
//!
//! Turns logical folder paths into locations through a classloader-style
//! resource loader.

pub mod loader;
pub mod operations;

pub use loader::{ClassPath, ClassPathEntry, ResourceLoader};
pub use operations::{
    class_resource_name, list_resources, list_resources_with_anchor, locate, locate_with_anchor,
};
