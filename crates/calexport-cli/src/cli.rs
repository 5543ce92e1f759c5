//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ExportConfig;

/// calexport - Export a calendar event as an .ics file
#[derive(Debug, Parser)]
#[command(name = "calexport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CALEXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Event overrides (take precedence over the config file) ---
    /// Event title
    #[arg(long)]
    pub title: Option<String>,

    /// Event start, local time (e.g. 2026-06-19T18:00:00)
    #[arg(long)]
    pub start: Option<String>,

    /// Event end, local time
    #[arg(long)]
    pub end: Option<String>,

    /// Venue or address
    #[arg(long)]
    pub location: Option<String>,

    /// Event description (use \n for embedded newlines)
    #[arg(long)]
    pub description: Option<String>,

    /// Stable event identifier (derived from the title when unset)
    #[arg(long)]
    pub uid: Option<String>,

    // --- Output options ---
    /// Directory to write the .ics file to
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Filename for the .ics file (derived from the title when unset)
    #[arg(long)]
    pub filename: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the .ics file and write it to the output directory (default)
    Export,

    /// Print the assembled ICS document to stdout without writing a file
    Show,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommand actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Dump,
    /// Validate the configuration
    Validate,
    /// Show the configuration file path
    Path,
}

impl Cli {
    /// Folds the command-line overrides into a loaded configuration.
    pub fn apply_overrides(&self, config: &mut ExportConfig) {
        if let Some(ref title) = self.title {
            config.event.title = title.clone();
        }
        if let Some(ref start) = self.start {
            config.event.start = start.clone();
        }
        if let Some(ref end) = self.end {
            config.event.end = end.clone();
        }
        if let Some(ref location) = self.location {
            config.event.location = location.clone();
        }
        if let Some(ref description) = self.description {
            config.event.description = description.clone();
        }
        if let Some(ref uid) = self.uid {
            config.event.uid = Some(uid.clone());
        }
        if let Some(ref out_dir) = self.out_dir {
            config.output.directory = Some(out_dir.clone());
        }
        if let Some(ref filename) = self.filename {
            config.output.filename = Some(filename.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence() {
        let cli = Cli::parse_from([
            "calexport",
            "--title",
            "Boda",
            "--start",
            "2026-06-19T18:00:00",
            "--end",
            "2026-06-20T04:00:00",
        ]);
        let mut config = ExportConfig::default();
        config.event.title = "from config".to_string();
        cli.apply_overrides(&mut config);
        assert_eq!(config.event.title, "Boda");
        assert_eq!(config.event.start, "2026-06-19T18:00:00");
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::parse_from(["calexport", "show"]);
        assert!(matches!(cli.command, Some(Command::Show)));

        let cli = Cli::parse_from(["calexport", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Path
            })
        ));
    }
}
