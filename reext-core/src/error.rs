use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure touching the filesystem while renaming a tree.
///
/// The first one raised aborts the traversal. Renames already performed are
/// left in place.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("Failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Failed to read directory {}", .path.display())]
    Walk {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Root directory not found: {}", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("Root is not a directory: {}", .path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("Failed to inspect root {}", .path.display())]
    Root {
        path: PathBuf,
        source: io::Error,
    },
}

impl FilesystemError {
    /// The path the failure is about (the source path for renames).
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Rename { from, .. } => from,
            Self::Walk { path, .. }
            | Self::RootNotFound { path }
            | Self::RootNotDirectory { path }
            | Self::Root { path, .. } => path,
        }
    }

    /// Message including the underlying OS error, e.g. for JSON output.
    pub fn detailed(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }

    /// True when the root itself was unusable, before anything was renamed.
    pub fn is_root_error(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. } | Self::RootNotDirectory { .. } | Self::Root { .. }
        )
    }
}

/// Invalid rename configuration, detected before the tree is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {which} suffix: must not be empty")]
    EmptySuffix { which: &'static str },

    #[error("invalid {which} suffix {suffix:?}: must not contain a path separator")]
    SuffixContainsSeparator { which: &'static str, suffix: String },

    #[error("invalid suffixes: source and target are both {0:?}")]
    IdenticalSuffixes(String),
}
