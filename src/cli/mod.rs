//! Command-line interface.
//!
//! With no subcommand the TUI starts; the subcommands are small helpers that
//! print something and exit.

mod completions;

use crate::config::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Terminal front end for the DRAFTGEN writing assistant
#[derive(Parser, Debug)]
#[command(name = "draftgen", version, about, long_about = None)]
pub struct Cli {
    /// Color theme (dark, light, nocolor); overrides the config file
    #[arg(long, global = true, value_name = "THEME")]
    pub theme: Option<String>,

    /// Disable all colors (same as NO_COLOR=1)
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Config file location, honoring `--config`
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        Config::load_or_default(&path).context("Failed to load configuration")
    }

    /// Whether colors are disabled by flag or by the `NO_COLOR` convention
    pub fn colors_disabled(&self) -> bool {
        self.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }

    /// Run a subcommand. Returns false when there is none and the TUI should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            Some(Commands::Config) => {
                let config = self.load_config()?;
                print!("{}", config.to_toml_string()?);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["draftgen", "--theme", "light", "--config", "/tmp/d.toml"]);
        assert_eq!(cli.theme.as_deref(), Some("light"));
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/d.toml"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["draftgen", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: Some(Shell::Bash)
            })
        ));
    }

    #[test]
    fn test_no_colors_flag() {
        let cli = Cli::parse_from(["draftgen", "--no-colors"]);
        assert!(cli.colors_disabled());
    }
}
