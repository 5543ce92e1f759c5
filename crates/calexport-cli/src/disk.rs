//! Disk-backed delivery.
//!
//! Implements the [`Deliver`] capability by writing the payload to a
//! file. The handle is scoped: the payload goes into a named temp file
//! in the destination directory and is only persisted under the final
//! name once fully written. If anything fails the temp file is removed
//! when the handle drops, so a failed delivery never leaves a partial
//! .ics file behind.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use calexport_core::{Deliver, DeliveryError};

/// Delivers calendar payloads to a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskDelivery {
    directory: PathBuf,
}

impl DiskDelivery {
    /// Creates a delivery targeting the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory files are delivered into.
    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }
}

impl Deliver for DiskDelivery {
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<(), DeliveryError> {
        // Temp file in the destination directory so persist is a
        // same-filesystem rename.
        let mut handle =
            NamedTempFile::new_in(&self.directory).map_err(DeliveryError::Handle)?;
        debug!(path = %handle.path().display(), "acquired delivery handle");

        handle.write_all(bytes).map_err(DeliveryError::Write)?;
        handle.as_file().sync_all().map_err(DeliveryError::Write)?;

        let target = self.directory.join(filename);
        handle
            .persist(&target)
            .map_err(|e| DeliveryError::Finalize {
                filename: filename.to_string(),
                source: e.error,
            })?;

        info!(path = %target.display(), bytes = bytes.len(), "wrote calendar file");
        Ok(())
    }
}
