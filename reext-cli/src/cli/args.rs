use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use reext_core::config::{DEFAULT_SOURCE_SUFFIX, DEFAULT_TARGET_SUFFIX};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename files from one suffix to another across a directory tree
///
/// With no arguments, renames every *.txt file under ./include/ to *.h.
#[derive(Parser, Debug)]
#[command(name = "reext")]
#[command(author, version, about)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub rename: RenameArgs,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Run as if started in <PATH> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

/// Arguments for the default rename run
#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Directory to rename files under, relative to the working directory [default: include]
    #[arg(long, env = "REEXT_ROOT", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Suffix of the files to rename
    #[arg(
        long = "from",
        env = "REEXT_FROM",
        value_name = "SUFFIX",
        default_value = DEFAULT_SOURCE_SUFFIX
    )]
    pub source_suffix: String,

    /// Suffix the renamed files get instead
    #[arg(
        long = "to",
        env = "REEXT_TO",
        value_name = "SUFFIX",
        default_value = DEFAULT_TARGET_SUFFIX
    )]
    pub target_suffix: String,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Suppress the per-file lines and the summary (errors are still shown)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Write the completion file into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}
