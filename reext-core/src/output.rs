use crate::config::RenameConfig;
use crate::error::{ConfigError, FilesystemError};
use crate::rename::Rename;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a rename run, successful or not
#[derive(Debug)]
pub struct RenameResult {
    pub root: PathBuf,
    pub source_suffix: String,
    pub target_suffix: String,
    /// Renames performed, in order
    pub renames: Vec<Rename>,
    /// The error that stopped the run early
    pub failure: Option<FilesystemError>,
}

impl RenameResult {
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Result of a version command
#[derive(Debug, Serialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        rename_json(
            &self.root,
            &self.source_suffix,
            &self.target_suffix,
            &self.renames,
            self.failure.as_ref().map(FilesystemError::detailed),
        )
    }

    fn format_summary(&self) -> String {
        let count = self.renames.len();
        let root = self.root.display();

        if count == 0 && self.success() {
            return format!("No files ending in {} under {}", self.source_suffix, root);
        }

        let noun = if count == 1 { "file" } else { "files" };
        let mark = if self.success() { "✓" } else { "✗" };
        format!(
            "{mark} Renamed {count} {noun} ({} -> {}) under {root}",
            self.source_suffix, self.target_suffix
        )
    }
}

/// A rename run refused because of its configuration
#[derive(Debug)]
pub struct RejectedRename<'a> {
    pub config: &'a RenameConfig,
    pub error: &'a ConfigError,
}

impl OutputFormatter for RejectedRename<'_> {
    fn format_json(&self) -> String {
        rename_json(
            &self.config.root,
            &self.config.source_suffix,
            &self.config.target_suffix,
            &[],
            Some(self.error.to_string()),
        )
    }

    fn format_summary(&self) -> String {
        self.error.to_string()
    }
}

// Paths go out lossily; serde refuses paths that are not valid UTF-8
fn rename_json(
    root: &Path,
    source_suffix: &str,
    target_suffix: &str,
    renames: &[Rename],
    error: Option<String>,
) -> String {
    let renames: Vec<_> = renames
        .iter()
        .map(|rename| {
            json!({
                "from": rename.from.to_string_lossy(),
                "to": rename.to.to_string_lossy(),
            })
        })
        .collect();

    let mut value = json!({
        "success": error.is_none(),
        "operation": "rename",
        "root": root.to_string_lossy(),
        "source_suffix": source_suffix,
        "target_suffix": target_suffix,
        "summary": {
            "renames": renames.len(),
        },
        "renames": renames,
    });

    if let Some(error) = error {
        value["error"] = json!(error);
    }

    serde_json::to_string(&value).unwrap_or_default()
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn result(renames: usize, failure: Option<FilesystemError>) -> RenameResult {
        RenameResult {
            root: PathBuf::from("include"),
            source_suffix: ".txt".to_string(),
            target_suffix: ".h".to_string(),
            renames: (0..renames)
                .map(|i| Rename {
                    from: PathBuf::from(format!("include/f{i}.txt")),
                    to: PathBuf::from(format!("include/f{i}.h")),
                })
                .collect(),
            failure,
        }
    }

    #[test]
    fn test_summary_formats() {
        insta::assert_snapshot!(result(0, None).format_summary(), @"No files ending in .txt under include");
        insta::assert_snapshot!(result(1, None).format_summary(), @"✓ Renamed 1 file (.txt -> .h) under include");
        insta::assert_snapshot!(result(2, None).format_summary(), @"✓ Renamed 2 files (.txt -> .h) under include");
    }

    #[test]
    fn test_summary_after_failure() {
        let failure = FilesystemError::Rename {
            from: PathBuf::from("include/f1.txt"),
            to: PathBuf::from("include/f1.h"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            result(1, Some(failure)).format(OutputFormat::Summary),
            "✗ Renamed 1 file (.txt -> .h) under include"
        );
    }

    #[test]
    fn test_json_success() {
        let json: serde_json::Value =
            serde_json::from_str(&result(2, None).format(OutputFormat::Json)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["operation"], "rename");
        assert_eq!(json["root"], "include");
        assert_eq!(json["summary"]["renames"], 2);
        assert_eq!(json["renames"][1]["from"], "include/f1.txt");
        assert_eq!(json["renames"][1]["to"], "include/f1.h");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_json_failure_includes_error() {
        let failure = FilesystemError::RootNotFound {
            path: PathBuf::from("include"),
        };
        let json: serde_json::Value =
            serde_json::from_str(&result(0, Some(failure)).format_json()).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Root directory not found: include");
    }

    #[cfg(unix)]
    #[test]
    fn test_json_with_non_utf8_paths() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let include = PathBuf::from("include");
        let mut result = result(0, None);
        result.renames.push(Rename {
            from: include.join(OsStr::from_bytes(b"caf\xe9.txt")),
            to: include.join(OsStr::from_bytes(b"caf\xe9.h")),
        });

        let json: serde_json::Value = serde_json::from_str(&result.format_json()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["summary"]["renames"], 1);
        assert_eq!(json["renames"][0]["from"], "include/caf\u{fffd}.txt");
        assert_eq!(json["renames"][0]["to"], "include/caf\u{fffd}.h");
    }

    #[test]
    fn test_rejected_rename_formats() {
        let config = RenameConfig::new("include", ".txt", ".txt");
        let error = ConfigError::IdenticalSuffixes(".txt".to_string());
        let rejected = RejectedRename {
            config: &config,
            error: &error,
        };

        let json: serde_json::Value = serde_json::from_str(&rejected.format_json()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["operation"], "rename");
        assert_eq!(json["root"], "include");
        assert_eq!(json["summary"]["renames"], 0);
        assert_eq!(json["renames"], serde_json::json!([]));
        assert_eq!(
            json["error"],
            "invalid suffixes: source and target are both \".txt\""
        );
        assert_eq!(rejected.format_summary(), json["error"]);
    }

    #[test]
    fn test_version_formats() {
        let version = VersionResult {
            name: "reext".to_string(),
            version: "0.1.0".to_string(),
        };
        assert_eq!(version.format_summary(), "reext 0.1.0");
        assert_eq!(
            version.format_json(),
            r#"{"name":"reext","version":"0.1.0"}"#
        );
    }
}
