#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod error;
pub mod normalize;
pub mod operations;
pub mod output;
pub mod rename;
pub mod scanner;

pub use apply::{apply_plan, ApplyOptions, ApplyState};
pub use config::Config;
pub use error::NormalizeError;
pub use normalize::{is_normalized, normalize_name, NormalizeRules};
pub use operations::{normalize_operation, rename_all, NormalizeOptions};
pub use output::{NormalizeResult, OutputFormat, OutputFormatter, RenameRecord};
pub use rename::{
    detect_case_insensitive_fs, is_windows_reserved, plan_renames, ConflictKind, Rename,
    RenameConflict, RenamePlan,
};
pub use scanner::{matches_extension, normalize_extension, scan_directory, FileEntry, ScanOptions};
