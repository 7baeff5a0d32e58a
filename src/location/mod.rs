//! Location module
//!
//! Models where a resource folder lives and how classloader URLs map onto it.

pub mod types;
pub mod url;

pub use types::{Location, normalize_prefix};
pub use url::{ResourceUrl, encode_path, file_url, jar_url, percent_decode};
