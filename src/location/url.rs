//! Resource URLs
//!
//! Parses the classloader-style URLs handed out by a resource loader
//! (`file:/dir/` and `jar:file:/app.jar!/entry`) and turns them into locations.
//! Paths inside URLs are percent-encoded; they are decoded as UTF-8 before the
//! filesystem is consulted.

use std::path::{Path, PathBuf};

use crate::error::UrlError;
use crate::location::types::Location;

const FILE_SCHEME: &str = "file:";
const JAR_SCHEME: &str = "jar:";

/// Parsed resource URL with decoded paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUrl {
    File { path: PathBuf },
    Jar { archive: PathBuf, entry: String },
    Other { url: String },
}

impl ResourceUrl {
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        if let Some(rest) = url.strip_prefix(JAR_SCHEME) {
            // jar:http:... and friends are remote archives
            let Some(inner) = rest.strip_prefix(FILE_SCHEME) else {
                return Ok(ResourceUrl::Other {
                    url: url.to_string(),
                });
            };

            let (archive, entry) = inner
                .split_once('!')
                .ok_or_else(|| UrlError::MissingSeparator(url.to_string()))?;

            return Ok(ResourceUrl::Jar {
                archive: PathBuf::from(percent_decode(strip_authority(archive))?),
                entry: percent_decode(entry.trim_start_matches('/'))?,
            });
        }

        if let Some(rest) = url.strip_prefix(FILE_SCHEME) {
            return Ok(ResourceUrl::File {
                path: PathBuf::from(percent_decode(strip_authority(rest))?),
            });
        }

        Ok(ResourceUrl::Other {
            url: url.to_string(),
        })
    }

    /// Location of the folder `prefix` given this URL
    pub fn to_location(&self, prefix: &str) -> Location {
        match self {
            ResourceUrl::File { path } => Location::directory(path.clone()),
            ResourceUrl::Jar { archive, .. } => Location::archive(archive.clone(), prefix),
            ResourceUrl::Other { url } => Location::unsupported(url.clone()),
        }
    }
}

/// Drop a `//host` authority, keeping the absolute path that follows it
fn strip_authority(path: &str) -> &str {
    match path.strip_prefix("//") {
        Some(rest) => rest.find('/').map_or(rest, |i| &rest[i..]),
        None => path,
    }
}

/// Percent-decode using UTF-8
pub fn percent_decode(input: &str) -> Result<String, UrlError> {
    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| UrlError::Decode {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Percent-encode a filesystem path segment by segment, keeping `/` separators
pub fn encode_path(path: &Path) -> String {
    path.to_string_lossy()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// `file:` URL for a filesystem path
pub fn file_url(path: &Path) -> String {
    format!("{FILE_SCHEME}{}", encode_path(path))
}

/// `jar:file:` URL for an entry inside an archive
pub fn jar_url(archive: &Path, entry: &str) -> String {
    format!(
        "{JAR_SCHEME}{FILE_SCHEME}{}!/{}",
        encode_path(archive),
        encode_path(Path::new(entry))
    )
}
