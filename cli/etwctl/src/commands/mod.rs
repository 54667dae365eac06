//! CLI commands.

mod container;
mod new;
mod parse;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// etwctl - Parse GUIDs and decode ETW extended data.
#[derive(Debug, Parser)]
#[command(name = "etwctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to $ETWCTL_FORMAT, then table.
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse GUIDs and show their canonical form and byte layout.
    Parse(parse::ParseCommand),

    /// Generate random GUIDs.
    New(new::NewCommand),

    /// Decode the container id from a JSON event record file.
    ContainerId(container::ContainerIdCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let format = match self.format.as_deref() {
            Some(name) => match OutputFormat::parse(name) {
                Some(format) => format,
                None => bail!("--format must be 'table' or 'json', got '{name}'."),
            },
            None => config.format,
        };

        let ctx = CommandContext { format };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::New(cmd) => cmd.run(ctx),
            Commands::ContainerId(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("etwctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_container_id_subcommand() {
        let cli = Cli::try_parse_from(["etwctl", "--format", "json", "container-id", "rec.json"])
            .unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(matches!(cli.command, Commands::ContainerId(_)));
    }

    #[test]
    fn rejects_unknown_format_flag() {
        let cli = Cli::try_parse_from(["etwctl", "--format", "xml", "version"]).unwrap();
        assert!(cli.run(Config::default()).is_err());
    }
}
