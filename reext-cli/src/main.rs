use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use reext_core::{ConfigError, FilesystemError, OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;

mod cli;
mod rename;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    let result = match cli.command {
        None => rename::handle_rename(cli.rename, use_color),
        Some(Commands::Version { output }) => handle_version(output),
        Some(Commands::Completions { shell, dir }) => handle_completions(shell, dir.as_deref()),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 1 for a run aborted by the filesystem, 2 for bad input.
fn exit_code(e: &anyhow::Error) -> i32 {
    if e.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }

    match e.downcast_ref::<FilesystemError>() {
        Some(err) if err.is_root_error() => 2,
        _ => 1,
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "reext".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}

fn handle_completions(shell: clap_complete::Shell, dir: Option<&Path>) -> Result<()> {
    let mut cmd = Cli::command();
    match dir {
        Some(dir) => generate_completions(shell, &mut cmd, "reext", dir),
        None => {
            clap_complete::generate(shell, &mut cmd, "reext", &mut io::stdout());
            Ok(())
        },
    }
}

// Generate shell completions
pub fn generate_completions<G: clap_complete::Generator>(
    gen: G,
    cmd: &mut clap::Command,
    name: &str,
    out_dir: &Path,
) -> Result<()> {
    use clap_complete::generate_to;
    use std::fs;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory {}", out_dir.display()))?;
    let path = generate_to(gen, cmd, name, out_dir)?;
    eprintln!("Generated completion file: {}", path.display());
    Ok(())
}
