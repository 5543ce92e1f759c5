//! The delivery capability handed the finished document.
//!
//! The serializer core never touches the filesystem, a browser, or any
//! other host surface. Whoever embeds it supplies a [`Deliver`]
//! implementation; the core only hands over a byte payload and a
//! suggested filename. Implementations must use scoped acquisition:
//! whatever transient handle they open has to be released on every exit
//! path, success or failure, and a failed delivery must never leave a
//! partial file behind.

use thiserror::Error;

/// An error from the delivery collaborator.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Could not acquire the transient delivery handle.
    #[error("failed to acquire delivery handle: {0}")]
    Handle(#[source] std::io::Error),

    /// Writing the payload through the handle failed.
    #[error("failed to write calendar payload: {0}")]
    Write(#[source] std::io::Error),

    /// The payload was written but could not be finalized under the
    /// target filename.
    #[error("failed to finalize delivery as {filename}: {source}")]
    Finalize {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

/// Capability interface for delivering a finished calendar payload.
///
/// `bytes` is the complete payload (BOM chunk plus document text);
/// `filename` is a suggestion, any valid filename string is acceptable.
pub trait Deliver {
    /// Delivers the payload, all-or-nothing.
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory delivery used to exercise the capability seam.
    #[derive(Default)]
    struct RecordingDelivery {
        delivered: Vec<(Vec<u8>, String)>,
    }

    impl Deliver for RecordingDelivery {
        fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<(), DeliveryError> {
            self.delivered.push((bytes.to_vec(), filename.to_string()));
            Ok(())
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let mut sink = RecordingDelivery::default();
        let delivery: &mut dyn Deliver = &mut sink;
        delivery.deliver(b"payload", "event.ics").unwrap();
        assert_eq!(sink.delivered.len(), 1);
        assert_eq!(sink.delivered[0].1, "event.ics");
    }

    #[test]
    fn errors_carry_io_sources() {
        use std::error::Error;
        let err = DeliveryError::Finalize {
            filename: "event.ics".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("event.ics"));
    }
}
