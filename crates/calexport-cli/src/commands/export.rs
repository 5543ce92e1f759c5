//! Export commands: write the .ics file, or print it for inspection.

use chrono::Utc;
use tracing::{debug, info};

use calexport_core::{serialize, Deliver};

use crate::commands::config::filename_for;
use crate::config::ExportConfig;
use crate::disk::DiskDelivery;
use crate::error::ExportResult;

/// Builds the document and delivers it through the configured sink.
pub fn export(config: &ExportConfig) -> ExportResult<()> {
    let descriptor = config.event.to_descriptor()?;
    let filename = filename_for(config, &descriptor);

    debug!(uid = %descriptor.uid, title = %descriptor.title, "serializing event");
    let document = serialize(&descriptor, Utc::now());

    let directory = config
        .output
        .directory
        .clone()
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let mut delivery = DiskDelivery::new(directory);
    delivery.deliver(&document.to_delivery_bytes(), &filename)?;

    info!(filename = %filename, "export complete");
    println!("{}", filename);
    Ok(())
}

/// Prints the assembled document to stdout; delivery is bypassed.
pub fn show(config: &ExportConfig) -> ExportResult<()> {
    let descriptor = config.event.to_descriptor()?;
    let document = serialize(&descriptor, Utc::now());
    // Document lines already carry CRLF terminators.
    print!("{}", document.as_str());
    Ok(())
}
