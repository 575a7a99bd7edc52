use crate::config::RenameConfig;
use crate::error::ConfigError;
use crate::fs::FileSystem;
use crate::output::RenameResult;
use crate::rename::{rename_tree, Rename};

/// Rename operation - equivalent to running `reext`
///
/// Invalid configuration is an error. A filesystem failure is not: it ends up
/// in `RenameResult::failure`, next to the renames that did happen, so callers
/// can still report them. Each rename is also passed to `on_rename` as it
/// happens.
pub fn rename_operation<F>(
    fs: &dyn FileSystem,
    config: &RenameConfig,
    mut on_rename: F,
) -> Result<RenameResult, ConfigError>
where
    F: FnMut(&Rename),
{
    config.validate()?;

    let mut renames = Vec::new();
    let failure = rename_tree(fs, config, |rename| {
        on_rename(rename);
        renames.push(rename.clone());
    })
    .err();

    Ok(RenameResult {
        root: config.root.clone(),
        source_suffix: config.source_suffix.clone(),
        target_suffix: config.target_suffix.clone(),
        renames,
        failure,
    })
}
