use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::normalize::NormalizeRules;
use crate::scanner::FileEntry;

/// Windows reserved filenames that cannot be used
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// A single planned move within the scanned directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
    /// Source and target differ only in letter case
    #[serde(default)]
    pub case_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameConflict {
    pub sources: Vec<PathBuf>,
    pub target: PathBuf,
    /// The normalized base name; `target` can't be trusted to carry it when
    /// the name is `.` or `..`
    pub target_name: String,
    pub kind: ConflictKind,
}

impl RenameConflict {
    pub fn new(
        sources: Vec<PathBuf>,
        target: PathBuf,
        target_name: &OsStr,
        kind: ConflictKind,
    ) -> Self {
        Self {
            sources,
            target,
            target_name: target_name.to_string_lossy().into_owned(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Multiple sources map to the same target
    MultipleToOne,
    /// Something other than the source already lives at the target
    TargetExists,
    /// Target is a Windows reserved name
    WindowsReserved,
    /// Normalization produced an unusable name
    InvalidName,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MultipleToOne => "multiple files map to",
            Self::TargetExists => "target already exists",
            Self::WindowsReserved => "reserved name",
            Self::InvalidName => "invalid name",
        };
        f.write_str(label)
    }
}

impl fmt::Display for RenameConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources = self
            .sources
            .iter()
            .map(|p| display_name(p))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} -> {} ({})", sources, self.target_name, self.kind)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub renames: Vec<Rename>,
    pub conflicts: Vec<RenameConflict>,
    /// Matched entries that are already in normalized form
    pub unchanged: Vec<PathBuf>,
    pub case_insensitive_fs: bool,
}

impl RenamePlan {
    /// Number of matched entries the plan was built from
    pub fn matched(&self) -> usize {
        let conflicted: HashSet<&PathBuf> =
            self.conflicts.iter().flat_map(|c| c.sources.iter()).collect();
        self.renames.len() + self.unchanged.len() + conflicted.len()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Check if the filesystem at the given path is case-insensitive
pub fn detect_case_insensitive_fs(path: &Path) -> bool {
    let Ok(temp_dir) = TempDir::new_in(path) else {
        return false; // Assume case-sensitive if we can't test
    };

    let test_file_lower = temp_dir.path().join("test_case_a");
    let test_file_upper = temp_dir.path().join("test_case_A");

    if fs::write(&test_file_lower, b"test").is_err() {
        return false;
    }

    fs::metadata(&test_file_upper).is_ok()
}

/// Check if a filename is a Windows reserved name
pub fn is_windows_reserved(name: &str) -> bool {
    let base = name.split('.').next().unwrap_or(name).to_uppercase();

    WINDOWS_RESERVED.contains(&base.as_str())
}

fn is_windows_reserved_on_windows(name: &str) -> bool {
    if !cfg!(windows) {
        return false;
    }
    is_windows_reserved(name)
}

fn is_case_only(from: &Path, to: &Path) -> bool {
    from != to && from.to_string_lossy().to_lowercase() == to.to_string_lossy().to_lowercase()
}

/// Plan the renames for `entries`, detecting every conflict up front.
///
/// Nothing on disk is modified. Renames involved in a conflict are left out
/// of `renames` and described in `conflicts` instead.
pub fn plan_renames(
    directory: &Path,
    entries: &[FileEntry],
    rules: &NormalizeRules,
) -> RenamePlan {
    let mut plan = RenamePlan::default();
    let mut candidates: Vec<(PathBuf, PathBuf, OsString)> = Vec::new();

    for entry in entries {
        let from = entry.path();
        let new_name = entry.normalized_name(rules);

        if new_name == entry.base_name {
            plan.unchanged.push(from);
            continue;
        }

        let to = entry.dir.join(&new_name);

        if new_name.is_empty() || new_name == "." || new_name == ".." {
            plan.conflicts.push(RenameConflict::new(
                vec![from],
                to,
                &new_name,
                ConflictKind::InvalidName,
            ));
            continue;
        }

        if is_windows_reserved_on_windows(&new_name.to_string_lossy()) {
            plan.conflicts.push(RenameConflict::new(
                vec![from],
                to,
                &new_name,
                ConflictKind::WindowsReserved,
            ));
            continue;
        }

        candidates.push((from, to, new_name));
    }

    // Only check the filesystem when a case-only change could matter
    plan.case_insensitive_fs = candidates.iter().any(|(from, to, _)| is_case_only(from, to))
        && detect_case_insensitive_fs(directory);

    // Group by target; BTreeMap keeps the conflict report stable
    let mut by_target: BTreeMap<&PathBuf, (&OsString, Vec<PathBuf>)> = BTreeMap::new();
    for (from, to, new_name) in &candidates {
        by_target
            .entry(to)
            .or_insert_with(|| (new_name, Vec::new()))
            .1
            .push(from.clone());
    }

    let mut conflicted_targets = HashSet::new();
    for (target, (new_name, sources)) in by_target {
        if sources.len() > 1 {
            conflicted_targets.insert(target.clone());
            plan.conflicts.push(RenameConflict::new(
                sources,
                target.clone(),
                new_name,
                ConflictKind::MultipleToOne,
            ));
        }
    }

    for (from, to, new_name) in candidates {
        if conflicted_targets.contains(&to) {
            continue;
        }

        let case_only = is_case_only(&from, &to);
        let same_file = case_only && plan.case_insensitive_fs;

        if !same_file && fs::symlink_metadata(&to).is_ok() {
            plan.conflicts.push(RenameConflict::new(
                vec![from],
                to,
                &new_name,
                ConflictKind::TargetExists,
            ));
            continue;
        }

        plan.renames.push(Rename {
            from,
            to,
            case_only: same_file,
        });
    }

    plan
}
