//! In-memory [`FileSystem`] for exercising the renamer without a disk.

use crate::error::FilesystemError;
use crate::fs::{EntryKind, FileEntry, FileSystem};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(Vec<u8>),
    Dir,
    DirLink,
}

impl Node {
    fn kind(&self) -> EntryKind {
        match self {
            Self::File(_) => EntryKind::File,
            Self::Dir => EntryKind::Dir,
            Self::DirLink => EntryKind::DirLink,
        }
    }
}

/// A tree of files and directories held in a map keyed by path.
///
/// Renames follow the host rules the renamer relies on: an existing file at
/// the destination is replaced, a directory at the destination is an error.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    rename_failures: HashMap<PathBuf, io::ErrorKind>,
    read_dir_failures: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating any missing parent directories.
    pub fn add_file(&mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> &mut Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes
            .get_mut()
            .insert(path.to_path_buf(), Node::File(contents.as_ref().to_vec()));
        self
    }

    /// Add a directory, creating any missing parent directories.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.get_mut().insert(path.to_path_buf(), Node::Dir);
        self
    }

    /// Add a symlink that points at some directory.
    pub fn add_dir_link(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.get_mut().insert(path.to_path_buf(), Node::DirLink);
        self
    }

    /// Make every rename away from `path` fail with `kind`.
    pub fn fail_rename(&mut self, path: impl AsRef<Path>, kind: io::ErrorKind) -> &mut Self {
        self.rename_failures.insert(path.as_ref().to_path_buf(), kind);
        self
    }

    /// Make listing `path` fail.
    pub fn fail_read_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.read_dir_failures.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.nodes.borrow().contains_key(path.as_ref())
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// Every path in the tree, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.nodes.borrow().keys().cloned().collect()
    }

    fn add_parents(&mut self, path: &Path) {
        let nodes = self.nodes.get_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        match self.nodes.borrow().get(path) {
            Some(node) => Ok(matches!(node, Node::Dir | Node::DirLink)),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<FileEntry>, FilesystemError> {
        let walk_error = |kind, message: &str| FilesystemError::Walk {
            path: dir.to_path_buf(),
            source: io::Error::new(kind, message.to_string()),
        };

        if self.read_dir_failures.contains(dir) {
            return Err(walk_error(io::ErrorKind::PermissionDenied, "permission denied"));
        }

        let nodes = self.nodes.borrow();
        match nodes.get(dir) {
            Some(Node::Dir) => {},
            // Link targets are not modelled
            Some(Node::DirLink) => return Ok(Vec::new()),
            Some(Node::File(_)) => return Err(walk_error(io::ErrorKind::Other, "not a directory")),
            None => return Err(walk_error(io::ErrorKind::NotFound, "no such directory")),
        }

        // BTreeMap order among siblings is file name order
        Ok(nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .map(|(path, node)| FileEntry::new(path.clone(), node.kind()))
            .collect())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if let Some(kind) = self.rename_failures.get(from) {
            return Err(io::Error::new(*kind, "injected rename failure"));
        }

        let mut nodes = self.nodes.borrow_mut();

        match nodes.get(from) {
            Some(Node::File(_) | Node::DirLink) => {},
            Some(Node::Dir) => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "directory renames are not supported",
                ))
            },
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", from.display()),
                ))
            },
        }

        if matches!(nodes.get(to), Some(Node::Dir | Node::DirLink)) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", to.display()),
            ));
        }

        if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
            if nodes.get(parent) != Some(&Node::Dir) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", parent.display()),
                ));
            }
        }

        if let Some(node) = nodes.remove(from) {
            nodes.insert(to.to_path_buf(), node);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_creates_parents() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("include/sub/b.txt", "b");

        assert_eq!(
            fs.paths(),
            vec![
                PathBuf::from("include"),
                PathBuf::from("include/sub"),
                PathBuf::from("include/sub/b.txt"),
            ]
        );
        assert!(fs.is_dir(Path::new("include/sub")).unwrap());
        assert!(!fs.is_dir(Path::new("include/sub/b.txt")).unwrap());
    }

    #[test]
    fn test_read_dir_lists_only_children() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("include/b.txt", "b")
            .add_file("include/a.txt", "a")
            .add_file("include/sub/c.txt", "c")
            .add_dir_link("include/link");

        let entries = fs.read_dir(Path::new("include")).unwrap();
        assert_eq!(
            entries,
            vec![
                FileEntry::new("include/a.txt", EntryKind::File),
                FileEntry::new("include/b.txt", EntryKind::File),
                FileEntry::new("include/link", EntryKind::DirLink),
                FileEntry::new("include/sub", EntryKind::Dir),
            ]
        );
    }

    #[test]
    fn test_read_dir_failures() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("include/a.txt", "a").fail_read_dir("include");

        assert!(matches!(
            fs.read_dir(Path::new("include")),
            Err(FilesystemError::Walk { .. })
        ));
        assert!(matches!(
            fs.read_dir(Path::new("missing")),
            Err(FilesystemError::Walk { .. })
        ));
    }

    #[test]
    fn test_read_dir_on_dir_link_is_empty() {
        let mut fs = MemoryFileSystem::new();
        fs.add_dir_link("include");

        assert!(fs.is_dir(Path::new("include")).unwrap());
        assert!(fs.read_dir(Path::new("include")).unwrap().is_empty());
    }

    #[test]
    fn test_read_dir_on_file_fails() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("include/a.txt", "a");

        assert!(matches!(
            fs.read_dir(Path::new("include/a.txt")),
            Err(FilesystemError::Walk { .. })
        ));
    }

    #[test]
    fn test_rename_overwrites_file() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("include/a.txt", "new").add_file("include/a.h", "old");

        fs.rename(Path::new("include/a.txt"), Path::new("include/a.h"))
            .unwrap();

        assert!(!fs.exists("include/a.txt"));
        assert_eq!(fs.contents("include/a.h").unwrap(), b"new");
    }

    #[test]
    fn test_rename_onto_directory_fails() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("include/a.txt", "a").add_dir("include/a.h");

        assert!(fs
            .rename(Path::new("include/a.txt"), Path::new("include/a.h"))
            .is_err());
        assert!(fs.exists("include/a.txt"));
    }

    #[test]
    fn test_injected_rename_failure() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("include/a.txt", "a")
            .fail_rename("include/a.txt", io::ErrorKind::PermissionDenied);

        let err = fs
            .rename(Path::new("include/a.txt"), Path::new("include/a.h"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.exists("include/a.txt"));
    }
}
