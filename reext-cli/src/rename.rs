use anyhow::{Context, Result};
use nu_ansi_term::Color;
use reext_core::{
    rename_operation, OutputFormatter, RealFileSystem, RejectedRename, Rename, RenameConfig,
};

use crate::cli::{OutputFormat, RenameArgs};

pub fn handle_rename(args: RenameArgs, use_color: bool) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;

    let mut config = RenameConfig::for_working_dir(&current_dir);
    if let Some(root) = args.root {
        config.root = current_dir.join(root);
    }
    config.source_suffix = args.source_suffix;
    config.target_suffix = args.target_suffix;

    // Summary mode prints each rename as soon as it is done
    let stream = args.output == OutputFormat::Summary && !args.quiet;
    let result = rename_operation(&RealFileSystem, &config, |rename| {
        if stream {
            println!("{}", format_rename(rename, use_color));
        }
    });

    let result = match result {
        Ok(result) => result,
        Err(error) => {
            if args.output == OutputFormat::Json {
                let rejected = RejectedRename {
                    config: &config,
                    error: &error,
                };
                println!("{}", rejected.format_json());
            }
            return Err(error.into());
        },
    };

    match args.output {
        OutputFormat::Json => println!("{}", result.format(args.output.into())),
        OutputFormat::Summary => {
            let root_unusable = result.failure.as_ref().is_some_and(|f| f.is_root_error());
            if !args.quiet && !root_unusable {
                eprintln!("{}", result.format_summary());
            }
        },
    }

    match result.failure {
        Some(failure) => Err(failure.into()),
        None => Ok(()),
    }
}

fn format_rename(rename: &Rename, use_color: bool) -> String {
    if use_color {
        format!(
            "{} {} to {}",
            Color::Green.bold().paint("Renamed:"),
            rename.from.display(),
            rename.to.display()
        )
    } else {
        rename.to_string()
    }
}
