use anyhow::Result;
use filenorm_core::{normalize_operation, Config, NormalizeOptions, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_normalize(
    directory: &Path,
    extension: &str,
    config: Config,
    skip_conflicts: bool,
    verbose: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let options = NormalizeOptions {
        config,
        skip_conflicts,
        verbose,
    };

    let result = normalize_operation(directory, extension, &options)?;

    if !quiet {
        let formatted = result.format(output.into());
        if output == OutputFormat::Json {
            println!("{formatted}");
        } else {
            print!("{formatted}");
        }
    }

    Ok(())
}
