//! Locator operations
//!
//! Resolves a logical folder path into a `Location`. Packaged archives often
//! carry no directory records, so a folder inside one may not resolve by
//! itself; `locate_with_anchor` then identifies the archive through a resource
//! known to live next to the folder, typically a class file.

use log::{debug, info};

use crate::error::{LocateError, ResourceError, log_error};
use crate::listing::{ListingResult, list};
use crate::location::{Location, ResourceUrl};
use crate::locator::loader::ResourceLoader;
use crate::utils::folder_path;

/// Resolves the folder `path` through `loader`
pub fn locate<L>(loader: &L, path: &str) -> Result<Location, LocateError>
where
    L: ResourceLoader + ?Sized,
{
    let folder = folder_path(path).map_err(LocateError::InvalidPath)?;
    let url = loader
        .get_resource(&folder)
        .ok_or_else(|| LocateError::NotFound(folder.clone()))?;

    resolve_url(&url, &folder)
}

/// Resolves the folder `path`, falling back to the archive holding `anchor`.
///
/// Only an anchor inside an archive can stand in for the folder. When the
/// anchor resolves to a loose `file:` resource, the result is
/// `LocateError::NotFound` for the folder, not an unsupported location: a
/// directory root that lacks the folder has nothing to list.
pub fn locate_with_anchor<L>(loader: &L, path: &str, anchor: &str) -> Result<Location, LocateError>
where
    L: ResourceLoader + ?Sized,
{
    let folder = folder_path(path).map_err(LocateError::InvalidPath)?;
    if let Some(url) = loader.get_resource(&folder) {
        return resolve_url(&url, &folder);
    }

    debug!("Folder {:?} has no URL of its own, trying anchor {:?}", folder, anchor);

    let url = loader
        .get_resource(anchor)
        .ok_or_else(|| LocateError::NotFound(folder.clone()))?;

    match ResourceUrl::parse(&url)? {
        ResourceUrl::File { .. } => Err(LocateError::NotFound(folder)),
        parsed => {
            let location = parsed.to_location(&folder);
            info!("Folder {:?} located through anchor at {}", folder, location);
            Ok(location)
        }
    }
}

fn resolve_url(url: &str, folder: &str) -> Result<Location, LocateError> {
    let location = ResourceUrl::parse(url)?.to_location(folder);
    debug!("Folder {:?} located at {}", folder, location);
    Ok(location)
}

/// Resource name of a class: `com.example.App` becomes `com/example/App.class`
pub fn class_resource_name(class_name: &str) -> String {
    format!("{}.class", class_name.replace('.', "/"))
}

/// Locate and list the folder `path`
pub fn list_resources<L>(loader: &L, path: &str) -> Result<ListingResult, ResourceError>
where
    L: ResourceLoader + ?Sized,
{
    let location = locate(loader, path)
        .map_err(ResourceError::from)
        .inspect_err(log_error)?;
    Ok(list(&location)?)
}

/// Locate, with the anchor fallback, and list the folder `path`
pub fn list_resources_with_anchor<L>(
    loader: &L,
    path: &str,
    anchor: &str,
) -> Result<ListingResult, ResourceError>
where
    L: ResourceLoader + ?Sized,
{
    let location = locate_with_anchor(loader, path, anchor)
        .map_err(ResourceError::from)
        .inspect_err(log_error)?;
    Ok(list(&location)?)
}
