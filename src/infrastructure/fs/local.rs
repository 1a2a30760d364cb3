//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Provides atomic writes, recursive walks and standard file operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Write `content` to `path` through a sibling temp file and a rename.
///
/// An existing target keeps its permissions.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| FsError::from_io(e, &parent))?;

    let mut tmp =
        tempfile::NamedTempFile::new_in(&parent).map_err(|e| FsError::from_io(e, &parent))?;
    tmp.write_all(content)
        .map_err(|e| FsError::from_io(e, path))?;
    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| FsError::from_io(e, path))?;
    }
    tmp.persist(path)
        .map_err(|e| FsError::from_io(e.error, path))?;
    Ok(())
}

impl FileSystem for LocalFs {
    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        atomic_write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(path)
            .map_err(|e| FsError::from_io(e, path))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect::<Vec<_>>();
        entries.sort();
        Ok(entries)
    }

    fn walk_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(FsError::NotFound(root.to_path_buf()));
        }

        // Ignore files and hidden-file rules don't apply: every file counts.
        let mut files: Vec<PathBuf> = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .map(|entry| entry.into_path())
            .collect();
        files.sort();
        Ok(files)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        self.read_bytes(path)
            .map(|bytes| ContentHash::from_bytes(&bytes))
    }
}
