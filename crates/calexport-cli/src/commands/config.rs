//! Configuration commands.

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &ExportConfig) -> ExportResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ExportError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", ExportConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &ExportConfig) -> ExportResult<()> {
    // Building the descriptor runs every caller-side check: timestamps
    // parse and the event ends after it starts.
    let descriptor = config.event.to_descriptor()?;
    println!("Event '{}' is valid.", descriptor.title);
    println!("Would write: {}", filename_for(config, &descriptor));
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> ExportResult<()> {
    let config_path = ExportConfig::default_path();
    println!("config: {}", config_path.display());
    Ok(())
}

/// The filename the export would use: explicit override or title slug.
pub(crate) fn filename_for(
    config: &ExportConfig,
    descriptor: &calexport_core::EventDescriptor,
) -> String {
    config
        .output
        .filename
        .clone()
        .unwrap_or_else(|| descriptor.suggested_filename())
}
