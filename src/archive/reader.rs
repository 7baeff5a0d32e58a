//! Archive reader
//!
//! Opens a ZIP-style archive and yields its entry names. The underlying file
//! handle is owned by the reader and released when the reader is dropped.

use log::debug;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::ArchiveError;

/// An open archive, exclusively owned for the duration of one listing
pub struct ArchiveReader {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl ArchiveReader {
    /// Open the archive at `path` and read its central directory
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ArchiveError::NotFound(path.to_path_buf())
            } else {
                ArchiveError::Io {
                    archive: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let archive = ZipArchive::new(file).map_err(|e| zip_error(path, e))?;

        debug!(
            "Opened archive {} ({} entries)",
            path.display(),
            archive.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Lazily yield every entry name. Order is unspecified.
    pub fn entries(&mut self) -> Entries<'_> {
        Entries {
            reader: self,
            index: 0,
        }
    }

    /// Release the archive now rather than at end of scope
    pub fn close(self) {}
}

impl Drop for ArchiveReader {
    fn drop(&mut self) {
        debug!("Released archive {}", self.path.display());
    }
}

/// Iterator over the entry names of an `ArchiveReader`
pub struct Entries<'a> {
    reader: &'a mut ArchiveReader,
    index: usize,
}

impl Iterator for Entries<'_> {
    type Item = Result<String, ArchiveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.reader.archive.len() {
            return None;
        }

        let index = self.index;
        self.index += 1;

        // Names are UTF-8 whether or not the entry sets the UTF-8 flag
        let name = self
            .reader
            .archive
            .by_index_raw(index)
            .map(|entry| entry.name_raw().to_vec())
            .map_err(|e| e.to_string())
            .and_then(|raw| String::from_utf8(raw).map_err(|e| e.to_string()));

        Some(name.map_err(|reason| ArchiveError::EntryName {
            archive: self.reader.path.clone(),
            index,
            reason,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.reader.archive.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

fn zip_error(path: &Path, error: ZipError) -> ArchiveError {
    match error {
        ZipError::Io(source) => ArchiveError::Io {
            archive: path.to_path_buf(),
            source,
        },
        other => ArchiveError::Malformed {
            archive: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    /// Stored, empty entries with the UTF-8 flag cleared, whatever the name bytes
    fn write_unflagged_archive(path: &Path, names: &[&[u8]]) {
        const DOS_DATE: u16 = (40 << 9) | (1 << 5) | 1;
        let mut out = Vec::new();
        let mut central = Vec::new();

        for name in names {
            let offset = out.len() as u32;
            out.extend_from_slice(&0x04034b50u32.to_le_bytes());
            for field in [20u16, 0, 0, 0, DOS_DATE] {
                out.extend_from_slice(&field.to_le_bytes());
            }
            out.extend_from_slice(&[0; 12]); // crc, compressed and uncompressed size
            out.extend_from_slice(&(name.len() as u16).to_le_bytes());
            out.extend_from_slice(&0u16.to_le_bytes());
            out.extend_from_slice(name);

            central.extend_from_slice(&0x02014b50u32.to_le_bytes());
            for field in [20u16, 20, 0, 0, 0, DOS_DATE] {
                central.extend_from_slice(&field.to_le_bytes());
            }
            central.extend_from_slice(&[0; 12]);
            for field in [name.len() as u16, 0, 0, 0, 0] {
                central.extend_from_slice(&field.to_le_bytes());
            }
            central.extend_from_slice(&0u32.to_le_bytes());
            central.extend_from_slice(&offset.to_le_bytes());
            central.extend_from_slice(name);
        }

        let central_offset = out.len() as u32;
        out.extend_from_slice(&central);
        out.extend_from_slice(&0x06054b50u32.to_le_bytes());
        for field in [0u16, 0, names.len() as u16, names.len() as u16] {
            out.extend_from_slice(&field.to_le_bytes());
        }
        out.extend_from_slice(&(central.len() as u32).to_le_bytes());
        out.extend_from_slice(&central_offset.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());

        std::fs::write(path, out).unwrap();
    }

    fn write_archive(path: &Path, names: &[&str]) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for name in names {
            if name.ends_with('/') {
                writer.add_directory(*name, options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(b"x").unwrap();
            }
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.zip");
        write_archive(&path, &["pkg/", "pkg/readme.md", "pkg/sub/one.bin"]);

        let mut reader = ArchiveReader::open(&path).unwrap();
        assert_eq!(reader.len(), 3);
        assert!(!reader.is_empty());
        assert_eq!(reader.path(), path.as_path());

        let mut names: Vec<String> = reader.entries().collect::<Result<_, _>>().unwrap();
        names.sort();
        assert_eq!(names, vec!["pkg/", "pkg/readme.md", "pkg/sub/one.bin"]);
        reader.close();
    }

    #[test]
    fn test_utf8_names_without_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("legacy.zip");
        write_unflagged_archive(&path, &["data/été.txt".as_bytes(), b"data/plain.txt"]);

        let mut reader = ArchiveReader::open(&path).unwrap();
        let mut names: Vec<String> = reader.entries().collect::<Result<_, _>>().unwrap();
        names.sort();
        assert_eq!(names, vec!["data/plain.txt", "data/été.txt"]);
    }

    #[test]
    fn test_invalid_utf8_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("legacy.zip");
        write_unflagged_archive(&path, &[b"ok.txt", b"bad\xff.txt"]);

        let mut reader = ArchiveReader::open(&path).unwrap();
        let results: Vec<_> = reader.entries().collect();
        assert_eq!(results[0].as_deref().unwrap(), "ok.txt");
        assert!(matches!(
            results[1],
            Err(ArchiveError::EntryName { index: 1, .. })
        ));
    }

    #[test]
    fn test_missing_archive() {
        let dir = tempdir().unwrap();
        let result = ArchiveReader::open(&dir.path().join("absent.zip"));
        assert!(matches!(result, Err(ArchiveError::NotFound(_))));
    }

    #[test]
    fn test_malformed_archive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.zip");
        std::fs::write(&path, b"this is not a zip archive").unwrap();
        let result = ArchiveReader::open(&path);
        assert!(matches!(
            result,
            Err(ArchiveError::Malformed { .. } | ArchiveError::Io { .. })
        ));
    }
}
