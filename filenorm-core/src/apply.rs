use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rename::{Rename, RenamePlan};

/// Options for applying a rename plan
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Report each rename on stderr
    pub verbose: bool,
}

/// Tracks the renames performed so far
#[derive(Debug, Default)]
pub struct ApplyState {
    renames_performed: Vec<(PathBuf, PathBuf)>,
    verbose: bool,
}

impl ApplyState {
    fn new(verbose: bool) -> Self {
        Self {
            renames_performed: Vec::new(),
            verbose,
        }
    }

    fn log(&self, message: &str) {
        if self.verbose {
            eprintln!("{message}");
        }
    }

    pub fn renames_performed(&self) -> &[(PathBuf, PathBuf)] {
        &self.renames_performed
    }
}

/// Perform a single rename, staging through a temporary name for case-only
/// changes. Never replaces an existing destination.
fn perform_rename(rename: &Rename, state: &mut ApplyState) -> Result<()> {
    let from = &rename.from;
    let to = &rename.to;

    state.log(&format!("Renaming {} -> {}", from.display(), to.display()));

    if rename.case_only {
        let temp_name = staging_path(from);

        fs::rename(from, &temp_name).with_context(|| {
            format!(
                "Failed to rename {} to temp {}",
                from.display(),
                temp_name.display()
            )
        })?;

        fs::rename(&temp_name, to).with_context(|| {
            format!(
                "Failed to rename temp to {}; the file was left at {}",
                to.display(),
                temp_name.display()
            )
        })?;
    } else {
        // The destination may have appeared after planning
        if fs::symlink_metadata(to).is_ok() {
            return Err(anyhow!(
                "Refusing to rename {} to {}: destination already exists",
                from.display(),
                to.display()
            ));
        }

        fs::rename(from, to)
            .with_context(|| format!("Failed to rename {} to {}", from.display(), to.display()))?;
    }

    state.renames_performed.push((from.clone(), to.clone()));
    Ok(())
}

fn staging_path(from: &Path) -> PathBuf {
    let mut name = from.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.filenorm.tmp", std::process::id()));
    from.with_file_name(name)
}

/// Apply every rename in the plan, in order.
///
/// Stops at the first failure. Renames already performed are left in place.
pub fn apply_plan(plan: &RenamePlan, options: &ApplyOptions) -> Result<ApplyState> {
    let mut state = ApplyState::new(options.verbose);

    for rename in &plan.renames {
        perform_rename(rename, &mut state)?;
    }

    Ok(state)
}
