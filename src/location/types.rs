//! Location types
//!
//! A `Location` is where a resource folder actually lives.

use std::fmt;
use std::path::PathBuf;

/// Backing store of a resource folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A plain filesystem directory
    Directory { dir: PathBuf },
    /// A prefix inside an archive file; `prefix` is empty or ends with `/`
    Archive { archive: PathBuf, prefix: String },
    /// Resolved, but neither a directory nor an archive
    Unsupported { url: String },
}

impl Location {
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Location::Directory { dir: dir.into() }
    }

    /// Build an archive location, normalizing `prefix` to folder form
    pub fn archive(archive: impl Into<PathBuf>, prefix: &str) -> Self {
        Location::Archive {
            archive: archive.into(),
            prefix: normalize_prefix(prefix),
        }
    }

    pub fn unsupported(url: impl Into<String>) -> Self {
        Location::Unsupported { url: url.into() }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Directory { dir } => write!(f, "directory {}", dir.display()),
            Location::Archive { archive, prefix } => {
                write!(f, "archive {}!/{}", archive.display(), prefix)
            }
            Location::Unsupported { url } => write!(f, "URL {}", url),
        }
    }
}

/// Strip a leading `/` and make sure a non-empty prefix ends with `/`
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_start_matches('/');
    if trimmed.is_empty() || trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_prefix_normalized() {
        let location = Location::archive("app.zip", "/data");
        assert_eq!(
            location,
            Location::Archive {
                archive: PathBuf::from("app.zip"),
                prefix: "data/".into()
            }
        );
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("a/b/"), "a/b/");
    }

    #[test]
    fn test_display() {
        let location = Location::archive("/opt/app.jar", "pkg/");
        assert_eq!(location.to_string(), "archive /opt/app.jar!/pkg/");
        assert_eq!(
            Location::unsupported("http://host/x/").to_string(),
            "URL http://host/x/"
        );
    }
}
