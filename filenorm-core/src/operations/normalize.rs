use anyhow::Result;
use std::path::Path;

use crate::apply::{apply_plan, ApplyOptions};
use crate::config::Config;
use crate::error::NormalizeError;
use crate::output::{NormalizeResult, RenameRecord};
use crate::rename::plan_renames;
use crate::scanner::{normalize_extension, scan_directory};

#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    pub config: Config,
    /// Rename everything that does not conflict instead of failing
    pub skip_conflicts: bool,
    pub verbose: bool,
}

/// Normalize the name of every `.<extension>` file directly inside
/// `directory`, using the default rules.
pub fn rename_all(directory: &Path, extension: &str) -> Result<()> {
    normalize_operation(directory, extension, &NormalizeOptions::default()).map(|_| ())
}

/// Scan, plan and apply, returning what happened.
///
/// Conflicts abort the run before anything is renamed unless
/// `skip_conflicts` is set.
pub fn normalize_operation(
    directory: &Path,
    extension: &str,
    options: &NormalizeOptions,
) -> Result<NormalizeResult> {
    let extension = normalize_extension(extension)?;
    let rules = &options.config.normalize;

    let entries = scan_directory(directory, &extension, &options.config.scan)?;

    let mut plan = plan_renames(directory, &entries, rules);

    if plan.has_conflicts() && !options.skip_conflicts {
        return Err(NormalizeError::Conflicts(plan.conflicts).into());
    }

    let matched = plan.matched();
    let skipped = std::mem::take(&mut plan.conflicts);

    let state = apply_plan(
        &plan,
        &ApplyOptions {
            verbose: options.verbose,
        },
    )?;

    let renamed = state
        .renames_performed()
        .iter()
        .map(|(from, to)| RenameRecord {
            from: file_name_lossy(from),
            to: file_name_lossy(to),
        })
        .collect();

    Ok(NormalizeResult {
        directory: directory.to_path_buf(),
        extension,
        matched,
        unchanged: plan.unchanged.len(),
        renamed,
        skipped,
    })
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
