//! Listing operations
//!
//! Lists the immediate children of a resource folder, whether it lives in a
//! filesystem directory or under a prefix inside an archive.

use log::{debug, error, info};
use std::fs;
use std::io;
use std::path::Path;

use crate::archive::ArchiveReader;
use crate::error::ListingError;
use crate::listing::results::ListingResult;
use crate::location::Location;

/// Lists the immediate children of `location`
pub fn list(location: &Location) -> Result<ListingResult, ListingError> {
    let result = match location {
        Location::Directory { dir } => list_directory(location, dir),
        Location::Archive { archive, prefix } => list_archive(location, archive, prefix),
        Location::Unsupported { url } => Err(ListingError::UnsupportedLocation(url.clone())),
    };

    match &result {
        Ok(children) => info!("Listed {} - {} entries", location, children.len()),
        Err(e) => error!("Failed to list {}: {}", location, e),
    }

    result
}

fn list_directory(location: &Location, dir: &Path) -> Result<ListingResult, ListingError> {
    let io_failure = |e: io::Error| {
        if e.kind() == io::ErrorKind::NotFound {
            ListingError::NotFound(location.to_string())
        } else {
            ListingError::Io {
                location: location.to_string(),
                source: e,
            }
        }
    };

    let mut children = ListingResult::new();
    for entry in fs::read_dir(dir).map_err(io_failure)? {
        let name = entry.map_err(io_failure)?.file_name();
        let name = name
            .into_string()
            .map_err(|raw| ListingError::InvalidEntryName {
                location: location.to_string(),
                entry: raw.to_string_lossy().into_owned(),
            })?;
        children.insert(name);
    }

    Ok(children)
}

fn list_archive(
    location: &Location,
    archive: &Path,
    prefix: &str,
) -> Result<ListingResult, ListingError> {
    // Dropped on every return path below, including `?`
    let mut reader = ArchiveReader::open(archive)?;

    let mut children = ListingResult::new();
    let mut scanned = 0usize;
    for name in reader.entries() {
        let name = name?;
        scanned += 1;
        if let Some(child) = immediate_child(prefix, &name) {
            children.insert(child);
        }
    }

    debug!(
        "Scanned {} entries of {} for {} children",
        scanned,
        location,
        children.len()
    );

    Ok(children)
}

/// The first segment of `name` below `prefix`, if `name` lies strictly under it
pub fn immediate_child<'a>(prefix: &str, name: &'a str) -> Option<&'a str> {
    let suffix = name.strip_prefix(prefix)?;
    let child = match suffix.find('/') {
        Some(i) => &suffix[..i],
        None => suffix,
    };

    // Empty when `name` is the folder itself, or for `prefix//x`
    if child.is_empty() { None } else { Some(child) }
}

/// Collapse a flat list of archive entry names into the children of `prefix`
pub fn collect_children<I, S>(prefix: &str, names: I) -> ListingResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut children = ListingResult::new();
    for name in names {
        if let Some(child) = immediate_child(prefix, name.as_ref()) {
            children.insert(child);
        }
    }
    children
}
