use std::path::PathBuf;
use thiserror::Error;

use crate::rename::RenameConflict;

/// Failures the CLI distinguishes when choosing an exit code.
///
/// These travel inside `anyhow::Error`; recover them with `downcast_ref`.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid extension '{0}': expected a bare suffix such as 'txt'")]
    InvalidExtension(String),

    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid config: {}", .0.display())]
    InvalidConfig(PathBuf),

    #[error("{} rename conflict(s), nothing was renamed:\n{}", .0.len(), format_conflicts(.0))]
    Conflicts(Vec<RenameConflict>),
}

fn format_conflicts(conflicts: &[RenameConflict]) -> String {
    conflicts
        .iter()
        .map(|c| format!("  {c}"))
        .collect::<Vec<_>>()
        .join("\n")
}
