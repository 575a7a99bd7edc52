use crate::error::FilesystemError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What kind of node a directory entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Anything that is not a directory: regular files, symlinks to files,
    /// broken symlinks, special files. These are rename candidates.
    File,
    /// A real directory, descended into
    Dir,
    /// A symlink resolving to a directory. Never descended, never renamed.
    DirLink,
}

/// A path seen during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Final path segment
    pub fn name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The directory operations the renamer needs.
///
/// Implemented for the real disk by [`RealFileSystem`] and in memory by
/// [`crate::memory::MemoryFileSystem`].
pub trait FileSystem {
    /// Whether `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// Immediate children of `dir`, sorted by file name.
    fn read_dir(&self, dir: &Path) -> Result<Vec<FileEntry>, FilesystemError>;

    /// Move `from` to `to`, replacing an existing file at `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        fs::metadata(path).map(|metadata| metadata.is_dir())
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<FileEntry>, FilesystemError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| FilesystemError::Walk {
                path: err.path().unwrap_or(dir).to_path_buf(),
                source: err.into(),
            })?;

            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_symlink() && entry.path().is_dir() {
                EntryKind::DirLink
            } else {
                EntryKind::File
            };

            entries.push(FileEntry::new(entry.into_path(), kind));
        }

        Ok(entries)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}
