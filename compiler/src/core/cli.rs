use clap::{Parser, Subcommand};

use std::path::PathBuf;

use crate::data::filters::OrganizerKind;

use super::constants::{
    ENV_CONFIG, ENV_DATE_FORMAT, ENV_DEBUG, ENV_DUPLICATE_LAST_SELECTED, ENV_LAST_SELECTED,
    ENV_MODE, ENV_TABLE_ALIAS,
};

#[derive(Parser)]
#[command(name = "filterql")]
#[command(version, about = "Compile filter selections into SQL WHERE clauses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Section registration mode (default or global)
    #[arg(long, short = 'm', global = true, env = ENV_MODE, value_parser = parse_mode)]
    pub mode: Option<OrganizerKind>,

    /// Table alias prefixed to every column
    #[arg(long, short = 'a', global = true, env = ENV_TABLE_ALIAS)]
    pub alias: Option<String>,

    /// Field name of the filter the user changed last (global mode)
    #[arg(long, short = 'l', global = true, env = ENV_LAST_SELECTED)]
    pub last_selected: Option<String>,

    /// chrono format for date filter literals
    #[arg(long, global = true, env = ENV_DATE_FORMAT)]
    pub date_format: Option<String>,

    /// OR the last selected filter with the whole clause (global mode)
    #[arg(long, global = true, env = ENV_DUPLICATE_LAST_SELECTED)]
    pub duplicate_last_selected: Option<bool>,
}

/// Parse section registration mode from CLI/env string
fn parse_mode(s: &str) -> Result<OrganizerKind, String> {
    match s.to_lowercase().as_str() {
        "default" => Ok(OrganizerKind::Default),
        "global" | "global-filters" => Ok(OrganizerKind::Global),
        _ => Err(format!(
            "Invalid mode '{}'. Valid options: default, global",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Compile a JSON filter list and print the WHERE clause
    Compile {
        /// Path to the filter JSON file
        filters: PathBuf,

        /// Print the clause body without the WHERE prefix
        #[arg(long)]
        value_only: bool,
    },
    /// Parse and validate a JSON filter list without compiling it
    Check {
        /// Path to the filter JSON file
        filters: PathBuf,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub mode: Option<OrganizerKind>,
    pub alias: Option<String>,
    pub last_selected: Option<String>,
    pub date_format: Option<String>,
    pub duplicate_last_selected: Option<bool>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Commands) {
    let cli = Cli::parse();
    let config = CliConfig {
        debug: cli.debug,
        config: cli.config,
        mode: cli.mode,
        alias: cli.alias,
        last_selected: cli.last_selected,
        date_format: cli.date_format,
        duplicate_last_selected: cli.duplicate_last_selected,
    };
    (config, cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("default").unwrap(), OrganizerKind::Default);
        assert_eq!(parse_mode("GLOBAL").unwrap(), OrganizerKind::Global);
        assert_eq!(parse_mode("global-filters").unwrap(), OrganizerKind::Global);
        assert!(parse_mode("or").is_err());
    }

    #[test]
    fn test_cli_compile_command() {
        let cli = Cli::try_parse_from([
            "filterql",
            "compile",
            "filters.json",
            "--mode",
            "global",
            "-l",
            "RegionId",
            "-a",
            "t",
        ])
        .unwrap();

        assert_eq!(cli.mode, Some(OrganizerKind::Global));
        assert_eq!(cli.last_selected.as_deref(), Some("RegionId"));
        assert_eq!(cli.alias.as_deref(), Some("t"));
        match cli.command {
            Commands::Compile {
                filters,
                value_only,
            } => {
                assert_eq!(filters, PathBuf::from("filters.json"));
                assert!(!value_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_check_command() {
        let cli = Cli::try_parse_from(["filterql", "check", "filters.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["filterql"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_mode() {
        assert!(Cli::try_parse_from(["filterql", "--mode", "fuzzy", "check", "f.json"]).is_err());
    }
}
