#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod fs;
pub mod memory;
pub mod operations;
pub mod output;
pub mod rename;
pub mod walk;

pub use config::RenameConfig;
pub use error::{ConfigError, FilesystemError};
pub use fs::{EntryKind, FileEntry, FileSystem, RealFileSystem};
pub use memory::MemoryFileSystem;
pub use operations::rename_operation;
pub use output::{OutputFormat, OutputFormatter, RejectedRename, RenameResult, VersionResult};
pub use rename::{rename_tree, renamed_name, Rename};
pub use walk::TreeWalker;
