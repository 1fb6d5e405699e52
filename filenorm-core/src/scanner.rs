use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::NormalizeError;
use crate::normalize::NormalizeRules;

/// A matched file, split into its directory and base name.
///
/// The base name is kept as the OS gave it, so names that are not valid
/// UTF-8 survive the round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub dir: PathBuf,
    pub base_name: OsString,
}

impl FileEntry {
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<OsString>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
        }
    }

    /// Full path of the entry as it currently exists
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.base_name)
    }

    pub fn normalized_name(&self, rules: &NormalizeRules) -> OsString {
        rules.apply_os_str(&self.base_name)
    }

    /// Where the entry would land after normalization
    pub fn target(&self, rules: &NormalizeRules) -> PathBuf {
        self.dir.join(self.normalized_name(rules))
    }
}

/// Options controlling which directory entries are considered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Also match names starting with '.'
    #[serde(default)]
    pub include_hidden: bool,
}

/// Validate a user-supplied extension and return it without a leading dot.
pub fn normalize_extension(extension: &str) -> Result<String> {
    let ext = extension.strip_prefix('.').unwrap_or(extension);

    if ext.is_empty() || ext.contains('/') || ext.contains(std::path::MAIN_SEPARATOR) {
        return Err(NormalizeError::InvalidExtension(extension.to_string()).into());
    }

    Ok(ext.to_string())
}

/// Check whether `name` ends with `.<extension>`, ignoring ASCII case.
///
/// Works on raw bytes so names that are not valid UTF-8 still match.
pub fn matches_extension(name: impl AsRef<[u8]>, extension: &str) -> bool {
    let name = name.as_ref();
    let suffix_len = extension.len() + 1;
    if name.len() < suffix_len {
        return false;
    }

    let suffix = &name[name.len() - suffix_len..];
    suffix[0] == b'.' && suffix[1..].eq_ignore_ascii_case(extension.as_bytes())
}

/// List the immediate entries of `directory` whose name ends with
/// `.<extension>`. Order follows the directory listing.
pub fn scan_directory(
    directory: &Path,
    extension: &str,
    options: &ScanOptions,
) -> Result<Vec<FileEntry>> {
    let extension = normalize_extension(extension)?;

    let read_dir = match fs::read_dir(directory) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(NormalizeError::DirectoryNotFound(directory.to_path_buf()).into());
        },
        Err(e) => {
            if directory.exists() && !directory.is_dir() {
                return Err(NormalizeError::NotADirectory(directory.to_path_buf()).into());
            }
            return Err(e)
                .with_context(|| format!("Failed to read directory {}", directory.display()));
        },
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", directory.display()))?;

        let name = entry.file_name();
        let bytes = name.as_encoded_bytes();

        if !options.include_hidden && bytes.starts_with(b".") {
            continue;
        }

        if !matches_extension(bytes, &extension) {
            continue;
        }

        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if file_type.is_dir() {
            continue;
        }

        entries.push(FileEntry::new(directory, name));
    }

    Ok(entries)
}
