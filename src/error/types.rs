//! Error types
//!
//! Defines domain-specific error types for each module of the resource lister.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Coarse category of a failure, as surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The location is neither a directory nor an archive
    UnsupportedLocation,
    /// Storage unreachable, malformed or undecodable
    IoFailure,
    /// No folder corresponds to the requested path
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnsupportedLocation => write!(f, "unsupported location"),
            ErrorKind::IoFailure => write!(f, "I/O failure"),
            ErrorKind::NotFound => write!(f, "not found"),
        }
    }
}

/// Archive reader errors
#[derive(Debug)]
pub enum ArchiveError {
    NotFound(PathBuf),
    Io { archive: PathBuf, source: io::Error },
    Malformed { archive: PathBuf, reason: String },
    EntryName {
        archive: PathBuf,
        index: usize,
        reason: String,
    },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::NotFound(p) => write!(f, "Archive not found: {}", p.display()),
            ArchiveError::Io { archive, source } => {
                write!(f, "Cannot read archive {}: {}", archive.display(), source)
            }
            ArchiveError::Malformed { archive, reason } => {
                write!(f, "Malformed archive {}: {}", archive.display(), reason)
            }
            ArchiveError::EntryName {
                archive,
                index,
                reason,
            } => write!(
                f,
                "Cannot read entry #{} of archive {}: {}",
                index,
                archive.display(),
                reason
            ),
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchiveError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Resource URL errors
#[derive(Debug)]
pub enum UrlError {
    MissingSeparator(String),
    Decode { input: String, reason: String },
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::MissingSeparator(u) => write!(f, "Archive URL has no '!' separator: {}", u),
            UrlError::Decode { input, reason } => {
                write!(f, "Cannot percent-decode {}: {}", input, reason)
            }
        }
    }
}

impl std::error::Error for UrlError {}

/// Listing module errors
#[derive(Debug)]
pub enum ListingError {
    UnsupportedLocation(String),
    NotFound(String),
    Io { location: String, source: io::Error },
    Archive(ArchiveError),
    InvalidEntryName { location: String, entry: String },
    TimedOut { location: String, after: Duration },
    Interrupted { location: String, reason: String },
}

impl ListingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListingError::UnsupportedLocation(_) => ErrorKind::UnsupportedLocation,
            ListingError::NotFound(_) | ListingError::Archive(ArchiveError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            _ => ErrorKind::IoFailure,
        }
    }
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::UnsupportedLocation(l) => write!(f, "Cannot list files for {}", l),
            ListingError::NotFound(l) => write!(f, "Folder not found: {}", l),
            ListingError::Io { location, source } => {
                write!(f, "IO error listing {}: {}", location, source)
            }
            ListingError::Archive(e) => write!(f, "{}", e),
            ListingError::InvalidEntryName { location, entry } => {
                write!(f, "Entry name in {} is not valid UTF-8: {}", location, entry)
            }
            ListingError::TimedOut { location, after } => {
                write!(f, "Listing {} timed out after {:?}", location, after)
            }
            ListingError::Interrupted { location, reason } => {
                write!(f, "Listing {} was interrupted: {}", location, reason)
            }
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::Io { source, .. } => Some(source),
            ListingError::Archive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArchiveError> for ListingError {
    fn from(error: ArchiveError) -> Self {
        ListingError::Archive(error)
    }
}

/// Locator module errors
#[derive(Debug)]
pub enum LocateError {
    NotFound(String),
    InvalidPath(String),
    Url(UrlError),
}

impl LocateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LocateError::NotFound(_) | LocateError::InvalidPath(_) => ErrorKind::NotFound,
            LocateError::Url(_) => ErrorKind::IoFailure,
        }
    }
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocateError::NotFound(p) => write!(f, "Resource folder not found: {}", p),
            LocateError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            LocateError::Url(e) => write!(f, "Invalid resource URL: {}", e),
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocateError::Url(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UrlError> for LocateError {
    fn from(error: UrlError) -> Self {
        LocateError::Url(error)
    }
}

/// General error that encompasses locating and listing a resource folder
#[derive(Debug)]
pub enum ResourceError {
    Locate(LocateError),
    Listing(ListingError),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Locate(e) => write!(f, "Locate error: {}", e),
            ResourceError::Listing(e) => write!(f, "Listing error: {}", e),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Locate(e) => Some(e),
            ResourceError::Listing(e) => Some(e),
        }
    }
}

impl From<LocateError> for ResourceError {
    fn from(error: LocateError) -> Self {
        ResourceError::Locate(error)
    }
}

impl From<ListingError> for ResourceError {
    fn from(error: ListingError) -> Self {
        ResourceError::Listing(error)
    }
}
