//! Archive access
//!
//! Reads entry names out of packaged archives.

pub mod reader;

pub use reader::{ArchiveReader, Entries};
