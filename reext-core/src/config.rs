use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = "include";
pub const DEFAULT_SOURCE_SUFFIX: &str = ".txt";
pub const DEFAULT_TARGET_SUFFIX: &str = ".h";

/// Which tree to walk and which suffix to swap for which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Directory the traversal starts from (itself included)
    pub root: PathBuf,

    /// Files whose names end with this are renamed
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,

    /// Replaces `source_suffix` at the end of each renamed file
    #[serde(default = "default_target_suffix")]
    pub target_suffix: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            source_suffix: default_source_suffix(),
            target_suffix: default_target_suffix(),
        }
    }
}

fn default_source_suffix() -> String {
    DEFAULT_SOURCE_SUFFIX.to_string()
}

fn default_target_suffix() -> String {
    DEFAULT_TARGET_SUFFIX.to_string()
}

impl RenameConfig {
    pub fn new(
        root: impl Into<PathBuf>,
        source_suffix: impl Into<String>,
        target_suffix: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            source_suffix: source_suffix.into(),
            target_suffix: target_suffix.into(),
        }
    }

    /// Default suffixes, rooted at `<dir>/include/`
    pub fn for_working_dir(dir: &Path) -> Self {
        Self {
            root: dir.join(DEFAULT_ROOT),
            ..Self::default()
        }
    }

    /// Check the suffixes before anything on disk is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_suffix("source", &self.source_suffix)?;
        check_suffix("target", &self.target_suffix)?;

        if self.source_suffix == self.target_suffix {
            return Err(ConfigError::IdenticalSuffixes(self.source_suffix.clone()));
        }

        Ok(())
    }
}

fn check_suffix(which: &'static str, suffix: &str) -> Result<(), ConfigError> {
    if suffix.is_empty() {
        return Err(ConfigError::EmptySuffix { which });
    }

    // A separator would move the file out of its parent directory
    if suffix.chars().any(std::path::is_separator) {
        return Err(ConfigError::SuffixContainsSeparator {
            which,
            suffix: suffix.to_string(),
        });
    }

    Ok(())
}
