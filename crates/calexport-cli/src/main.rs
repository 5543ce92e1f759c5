//! calexport CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use calexport_cli::cli::{Cli, Command, ConfigAction};
use calexport_cli::config::ExportConfig;
use calexport_cli::error::ExportResult;
use calexport_core::tracing::{init_tracing, TracingConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ExportResult<()> {
    let mut config = if let Some(ref path) = cli.config {
        ExportConfig::load_from(path)?
    } else {
        ExportConfig::load()?
    };
    cli.apply_overrides(&mut config);

    match cli.command {
        Some(Command::Show) => calexport_cli::commands::export::show(&config),
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => calexport_cli::commands::config::dump(&config),
            ConfigAction::Validate => calexport_cli::commands::config::validate(&config),
            ConfigAction::Path => calexport_cli::commands::config::path(),
        },
        Some(Command::Export) | None => calexport_cli::commands::export::export(&config),
    }
}
