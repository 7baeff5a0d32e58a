//! Resource loaders
//!
//! A `ResourceLoader` answers "where does this resource live?" with a
//! classloader-style URL. `ClassPath` is the filesystem-backed implementation:
//! an ordered list of directory and archive roots.

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::archive::ArchiveReader;
use crate::config::ClassPathConfig;
use crate::location::{file_url, jar_url};

const ARCHIVE_EXTENSIONS: [&str; 3] = ["jar", "zip", "war"];

/// Resolves resource names to `file:` or `jar:file:` URLs
pub trait ResourceLoader {
    /// URL of `name`, with reserved characters percent-encoded, or `None`
    fn get_resource(&self, name: &str) -> Option<String>;
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for &T {
    fn get_resource(&self, name: &str) -> Option<String> {
        (**self).get_resource(name)
    }
}

/// One root of a class path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPathEntry {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl ClassPathEntry {
    /// Archives are recognized by extension, or by being a regular file
    pub fn infer(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let has_archive_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ARCHIVE_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)));

        if has_archive_extension || path.is_file() {
            ClassPathEntry::Archive(path)
        } else {
            ClassPathEntry::Directory(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ClassPathEntry::Directory(p) | ClassPathEntry::Archive(p) => p,
        }
    }

    fn absolute(self) -> Self {
        let absolute = |p: PathBuf| std::path::absolute(&p).unwrap_or(p);
        match self {
            ClassPathEntry::Directory(p) => ClassPathEntry::Directory(absolute(p)),
            ClassPathEntry::Archive(p) => ClassPathEntry::Archive(absolute(p)),
        }
    }
}

/// Ordered set of roots searched for resources, first match wins
#[derive(Debug, Clone, Default)]
pub struct ClassPath {
    entries: Vec<ClassPathEntry>,
}

impl ClassPath {
    pub fn new(entries: Vec<ClassPathEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(ClassPathEntry::absolute).collect(),
        }
    }

    pub fn from_config(config: &ClassPathConfig) -> Self {
        Self::new(config.entries())
    }

    pub fn entries(&self) -> &[ClassPathEntry] {
        &self.entries
    }

    fn find_in_directory(root: &Path, name: &str) -> Option<String> {
        let is_folder = name.is_empty() || name.ends_with('/');
        let candidate = root.join(name.trim_end_matches('/'));

        let found = if is_folder {
            candidate.is_dir()
        } else {
            candidate.is_file()
        };
        if !found {
            return None;
        }

        let mut url = file_url(&candidate);
        if is_folder && !url.ends_with('/') {
            url.push('/');
        }
        Some(url)
    }

    /// Only exact entry names resolve; archives without directory records
    /// therefore never resolve a folder name.
    fn find_in_archive(archive: &Path, name: &str) -> Option<String> {
        let mut reader = match ArchiveReader::open(archive) {
            Ok(reader) => reader,
            Err(e) => {
                warn!("Skipping class path archive {}: {}", archive.display(), e);
                return None;
            }
        };

        for entry in reader.entries() {
            match entry {
                Ok(entry) if entry == name => return Some(jar_url(archive, name)),
                Ok(_) => {}
                Err(e) => {
                    warn!("Skipping class path archive {}: {}", archive.display(), e);
                    return None;
                }
            }
        }

        None
    }
}

impl ResourceLoader for ClassPath {
    fn get_resource(&self, name: &str) -> Option<String> {
        let name = name.trim_start_matches('/');
        if name.split('/').any(|segment| segment == "..") {
            return None;
        }

        let url = self.entries.iter().find_map(|entry| match entry {
            ClassPathEntry::Directory(root) => Self::find_in_directory(root, name),
            ClassPathEntry::Archive(archive) => Self::find_in_archive(archive, name),
        });

        debug!("Resource {:?} resolved to {:?}", name, url);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::ResourceUrl;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn write_archive(path: &Path, names: &[&str]) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for name in names {
            writer.start_file(*name, options).unwrap();
            writer.write_all(b"x").unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_infer_entry() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ClassPathEntry::infer(dir.path().join("lib/app.JAR")),
            ClassPathEntry::Archive(_)
        ));
        assert!(matches!(
            ClassPathEntry::infer(dir.path()),
            ClassPathEntry::Directory(_)
        ));

        let bundle = dir.path().join("bundle");
        File::create(&bundle).unwrap();
        assert!(matches!(
            ClassPathEntry::infer(&bundle),
            ClassPathEntry::Archive(_)
        ));
    }

    #[test]
    fn test_directory_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/img")).unwrap();
        File::create(dir.path().join("assets/one.txt")).unwrap();

        let loader = ClassPath::new(vec![ClassPathEntry::Directory(dir.path().to_path_buf())]);

        let url = loader.get_resource("assets/").unwrap();
        assert!(url.starts_with("file:"));
        assert!(url.ends_with("/assets/"));
        assert_eq!(
            ResourceUrl::parse(&url).unwrap(),
            ResourceUrl::File {
                path: dir.path().join("assets/")
            }
        );

        assert!(loader.get_resource("assets/one.txt").is_some());
        assert!(loader.get_resource("assets/one.txt/").is_none());
        assert!(loader.get_resource("missing/").is_none());
        assert!(loader.get_resource("assets/../assets/").is_none());
    }

    #[test]
    fn test_archive_root_needs_exact_entry() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("app.jar");
        write_archive(&archive, &["com/example/App.class", "assets/one.txt"]);

        let loader = ClassPath::new(vec![ClassPathEntry::Archive(archive.clone())]);

        let url = loader.get_resource("com/example/App.class").unwrap();
        assert!(url.starts_with("jar:file:"));
        assert!(url.ends_with("!/com/example/App.class"));
        assert!(loader.get_resource("assets/").is_none());
    }

    #[test]
    fn test_first_root_wins_and_broken_roots_are_skipped() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.jar");
        fs::write(&broken, b"garbage").unwrap();
        let classes = dir.path().join("classes");
        fs::create_dir_all(classes.join("assets")).unwrap();

        let loader = ClassPath::new(vec![
            ClassPathEntry::Archive(broken),
            ClassPathEntry::Archive(dir.path().join("absent.jar")),
            ClassPathEntry::Directory(classes),
        ]);

        let url = loader.get_resource("assets/").unwrap();
        assert!(url.starts_with("file:"));
        assert_eq!(loader.entries().len(), 3);
    }
}
