//! High-level operations that correspond to CLI commands
//!
//! These sit between the CLI and the renamer: they validate input and gather
//! what happened into result types the CLI can format.

pub mod rename;

pub use rename::rename_operation;
