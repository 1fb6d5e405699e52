use bstr::ByteSlice;
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};

/// The individual steps applied to a base name, in order.
///
/// Every step is on by default. Turning a step off only skips it; the
/// remaining steps still run in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NormalizeRules {
    /// Replace every space with an underscore
    #[serde(default = "default_true")]
    pub replace_spaces: bool,

    /// Delete every hyphen
    #[serde(default = "default_true")]
    pub remove_hyphens: bool,

    /// Lowercase the whole name, extension included
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Strip leading and trailing underscores
    #[serde(default = "default_true")]
    pub trim_underscores: bool,
}

impl Default for NormalizeRules {
    fn default() -> Self {
        Self {
            replace_spaces: true,
            remove_hyphens: true,
            lowercase: true,
            trim_underscores: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl NormalizeRules {
    /// Apply the enabled steps to `name` and return the new name.
    pub fn apply(&self, name: &str) -> String {
        let mut out = if self.replace_spaces {
            name.replace(' ', "_")
        } else {
            name.to_string()
        };

        if self.remove_hyphens {
            out.retain(|c| c != '-');
        }

        if self.lowercase {
            out = out.to_lowercase();
        }

        if self.trim_underscores {
            out = out.trim_matches('_').to_string();
        }

        out
    }

    /// Apply the enabled steps to raw name bytes.
    ///
    /// Valid UTF-8 runs are lowercased as characters; invalid bytes pass
    /// through untouched.
    pub fn apply_bytes(&self, name: &[u8]) -> Vec<u8> {
        let mut out = if self.replace_spaces {
            name.replace(" ", "_")
        } else {
            name.to_vec()
        };

        if self.remove_hyphens {
            out.retain(|&b| b != b'-');
        }

        if self.lowercase {
            out = out.to_lowercase();
        }

        if self.trim_underscores {
            let start = out.iter().position(|&b| b != b'_').unwrap_or(out.len());
            let end = out.iter().rposition(|&b| b != b'_').map_or(start, |i| i + 1);
            out = out[start..end].to_vec();
        }

        out
    }

    /// Apply the rules to a name read from the filesystem.
    ///
    /// Names that are not valid UTF-8 are transformed byte-wise on unix and
    /// left as they are elsewhere.
    pub fn apply_os_str(&self, name: &OsStr) -> OsString {
        if let Some(name) = name.to_str() {
            return self.apply(name).into();
        }

        #[cfg(unix)]
        {
            use std::os::unix::ffi::{OsStrExt, OsStringExt};
            OsString::from_vec(self.apply_bytes(name.as_bytes()))
        }

        #[cfg(not(unix))]
        {
            name.to_os_string()
        }
    }

    /// True if applying the rules would leave `name` unchanged.
    pub fn is_normalized(&self, name: &str) -> bool {
        self.apply(name) == name
    }
}

/// Normalize a base name with the default rules.
pub fn normalize_name(name: &str) -> String {
    NormalizeRules::default().apply(name)
}

/// True if `name` is already in normalized form under the default rules.
pub fn is_normalized(name: &str) -> bool {
    NormalizeRules::default().is_normalized(name)
}
