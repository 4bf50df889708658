use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use versync_core::{BumpType, ConsoleReporter};

use crate::commands::{SyncArgs, handle_sync};
use crate::options::SyncOptions;

pub mod commands;
pub mod options;

#[derive(ValueEnum, Debug, Clone)]
enum CliBumpType {
    Major,
    Minor,
    Patch,
}

impl From<CliBumpType> for BumpType {
    fn from(value: CliBumpType) -> Self {
        match value {
            CliBumpType::Major => Self::Major,
            CliBumpType::Minor => Self::Minor,
            CliBumpType::Patch => Self::Patch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "versync",
    author,
    version,
    about = "Synchronize the package version between Cargo.toml and the Python package initializer",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    /// Increment the current version at the given precision
    #[arg(short, long, value_enum, conflicts_with = "set")]
    bump: Option<CliBumpType>,

    /// Set an explicit X.Y.Z version
    #[arg(short, long)]
    set: Option<String>,

    /// Path to the build descriptor
    #[arg(long, default_value = "Cargo.toml")]
    cargo: PathBuf,

    /// Path to the package initializer
    #[arg(long, default_value = "python/rs_bpe/__init__.py")]
    init: PathBuf,
}

/// # Errors
/// Returns error on a malformed `--set` value or when the current version
/// cannot be parsed for a bump.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    handle_sync(
        &SyncArgs {
            bump: cli.bump.map(Into::into),
            set: cli.set,
            options: SyncOptions::new(cli.cargo, cli.init),
        },
        &ConsoleReporter,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CliBumpType::Major, BumpType::Major)]
    #[case(CliBumpType::Minor, BumpType::Minor)]
    #[case(CliBumpType::Patch, BumpType::Patch)]
    fn test_cli_bump_type_to_bump_type(#[case] cli_type: CliBumpType, #[case] expected: BumpType) {
        let result: BumpType = cli_type.into();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(["versync"]);
        assert!(cli.bump.is_none());
        assert!(cli.set.is_none());
        assert_eq!(cli.cargo, PathBuf::from("Cargo.toml"));
        assert_eq!(cli.init, PathBuf::from("python/rs_bpe/__init__.py"));
    }

    #[test]
    fn test_cli_parsing_bump() {
        let cli = Cli::parse_from(["versync", "--bump", "patch"]);
        assert!(matches!(cli.bump, Some(CliBumpType::Patch)));
    }

    #[test]
    fn test_cli_parsing_set() {
        let cli = Cli::parse_from(["versync", "--set", "1.2.3"]);
        assert_eq!(cli.set, Some("1.2.3".to_string()));
    }

    #[test]
    fn test_cli_parsing_bump_conflicts_with_set() {
        let result = Cli::try_parse_from(["versync", "--bump", "patch", "--set", "1.2.3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_rejects_unknown_bump_value() {
        let result = Cli::try_parse_from(["versync", "--bump", "mega"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_custom_paths() {
        let cli = Cli::parse_from([
            "versync",
            "--cargo",
            "bindings/Cargo.toml",
            "--init",
            "python/mypkg/__init__.py",
        ]);
        assert_eq!(cli.cargo, PathBuf::from("bindings/Cargo.toml"));
        assert_eq!(cli.init, PathBuf::from("python/mypkg/__init__.py"));
    }
}
