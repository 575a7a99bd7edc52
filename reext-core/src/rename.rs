use crate::config::RenameConfig;
use crate::error::FilesystemError;
use crate::fs::{EntryKind, FileSystem};
use crate::walk::TreeWalker;
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A rename that has been performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Renamed: {} to {}",
            self.from.display(),
            self.to.display()
        )
    }
}

/// The new file name for `name`, or `None` if it doesn't end with
/// `source_suffix`.
///
/// Exactly one trailing `source_suffix` is dropped before `target_suffix` is
/// appended, so a file named just `.txt` becomes `.h`. Works on names that are
/// not valid UTF-8.
pub fn renamed_name(name: &OsStr, source_suffix: &str, target_suffix: &str) -> Option<OsString> {
    let stem = name
        .as_encoded_bytes()
        .strip_suffix(source_suffix.as_bytes())?;

    // SAFETY: `stem` is split off immediately before `source_suffix`, which is
    // valid UTF-8, so it is a valid encoded OsStr on its own.
    let mut renamed = unsafe { OsStr::from_encoded_bytes_unchecked(stem) }.to_os_string();
    renamed.push(target_suffix);
    Some(renamed)
}

/// Rename every file below `config.root` whose name ends with the source
/// suffix so that it ends with the target suffix, in place.
///
/// `on_rename` is called once after each successful rename. The first failure
/// aborts the walk; earlier renames stay done. An existing file at the new
/// path is replaced. Directories are never renamed.
///
/// The suffixes are used as given; see [`RenameConfig::validate`].
pub fn rename_tree<F>(
    fs: &dyn FileSystem,
    config: &RenameConfig,
    mut on_rename: F,
) -> Result<(), FilesystemError>
where
    F: FnMut(&Rename),
{
    check_root(fs, &config.root)?;

    for entry in TreeWalker::new(fs, &config.root) {
        let entry = entry?;
        if entry.kind != EntryKind::File {
            continue;
        }

        let Some(new_name) =
            renamed_name(entry.name(), &config.source_suffix, &config.target_suffix)
        else {
            continue;
        };

        let to = entry.path.with_file_name(new_name);
        if let Err(source) = fs.rename(&entry.path, &to) {
            return Err(FilesystemError::Rename {
                from: entry.path,
                to,
                source,
            });
        }

        on_rename(&Rename {
            from: entry.path,
            to,
        });
    }

    Ok(())
}

fn check_root(fs: &dyn FileSystem, root: &Path) -> Result<(), FilesystemError> {
    match fs.is_dir(root) {
        Ok(true) => Ok(()),
        Ok(false) => Err(FilesystemError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(FilesystemError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(FilesystemError::Root {
            path: root.to_path_buf(),
            source,
        }),
    }
}
