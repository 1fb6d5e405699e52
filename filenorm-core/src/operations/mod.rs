//! High-level operations that correspond to CLI commands
//!
//! These tie scanning, planning and applying together, separated from CLI
//! concerns like argument parsing and output formatting.

pub mod normalize;

pub use normalize::{normalize_operation, rename_all, NormalizeOptions};
