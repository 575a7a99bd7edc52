use crate::error::FilesystemError;
use crate::fs::{FileEntry, FileSystem};
use std::path::{Path, PathBuf};

/// Depth-first walk over everything below a root directory.
///
/// Each directory is listed in full before any of its entries are yielded, so
/// renaming a yielded file cannot cause it to be seen again. Within a
/// directory, entries come in name order; its subdirectories are entered only
/// after all of its entries have been yielded. Symlinked directories are
/// yielded but not entered.
pub struct TreeWalker<'a> {
    fs: &'a dyn FileSystem,
    pending: Vec<PathBuf>,
    current: std::vec::IntoIter<FileEntry>,
    done: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: &Path) -> Self {
        Self {
            fs,
            pending: vec![root.to_path_buf()],
            current: Vec::new().into_iter(),
            done: false,
        }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = Result<FileEntry, FilesystemError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(entry) = self.current.next() {
                return Some(Ok(entry));
            }

            let dir = self.pending.pop()?;
            let entries = match self.fs.read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                },
            };

            // Reverse so the first subdirectory is popped first
            self.pending.extend(
                entries
                    .iter()
                    .filter(|entry| entry.is_dir())
                    .map(|entry| entry.path.clone())
                    .rev(),
            );
            self.current = entries.into_iter();
        }
    }
}
