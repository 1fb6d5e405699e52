use clap::Parser;
use std::path::PathBuf;

use super::types::OutputFormat;

/// Normalize the names of files with a given extension: lowercase, spaces to
/// underscores, hyphens removed, outer underscores trimmed
#[derive(Parser, Debug)]
#[command(name = "filenorm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose files should be renamed (not searched recursively)
    pub directory: PathBuf,

    /// Extension to match, without the leading dot (e.g. "jpg")
    pub extension: String,

    /// Rename files that don't conflict and report the ones that do
    #[arg(long)]
    pub skip_conflicts: bool,

    /// Load configuration from this file instead of ./.filenorm.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Print nothing on success
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report each rename on stderr as it happens
    #[arg(short, long)]
    pub verbose: bool,
}
