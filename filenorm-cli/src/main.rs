use anyhow::{Context, Result};
use clap::Parser;
use filenorm_core::config::CONFIG_FILE_NAME;
use filenorm_core::{Config, NormalizeError};
use std::path::PathBuf;
use std::process;

mod cli;
mod normalize;

use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| {
        normalize::handle_normalize(
            &cli.directory,
            &cli.extension,
            config,
            cli.skip_conflicts,
            cli.verbose,
            cli.output,
            cli.quiet,
        )
    });

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => {
            Config::load_from_path(path).context(NormalizeError::InvalidConfig(path.clone()))
        },
        None => Config::load().context(NormalizeError::InvalidConfig(PathBuf::from(
            CONFIG_FILE_NAME,
        ))),
    }
}

/// 1 for conflicts, 2 for invalid input, 3 for anything else
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<NormalizeError>() {
        Some(NormalizeError::Conflicts(_)) => 1,
        Some(
            NormalizeError::InvalidExtension(_)
            | NormalizeError::DirectoryNotFound(_)
            | NormalizeError::NotADirectory(_)
            | NormalizeError::InvalidConfig(_),
        ) => 2,
        None => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let conflicts: anyhow::Error = NormalizeError::Conflicts(vec![]).into();
        assert_eq!(exit_code(&conflicts), 1);

        let missing: anyhow::Error = NormalizeError::DirectoryNotFound(PathBuf::from("x")).into();
        assert_eq!(exit_code(&missing), 2);

        let bad_config = anyhow::anyhow!("toml error")
            .context(NormalizeError::InvalidConfig(PathBuf::from("x.toml")));
        assert_eq!(exit_code(&bad_config), 2);
        assert_eq!(bad_config.to_string(), "invalid config: x.toml");

        // A plain message that merely looks like a config error is internal
        let lookalike = anyhow::anyhow!("invalid config: x.toml");
        assert_eq!(exit_code(&lookalike), 3);

        let io = anyhow::anyhow!("Failed to rename a to b");
        assert_eq!(exit_code(&io), 3);
    }
}
