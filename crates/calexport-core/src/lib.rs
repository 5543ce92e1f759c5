//! Core types: event descriptor, ICS serialization, escaping, folding, delivery

pub mod delivery;
pub mod escape;
pub mod event;
pub mod fold;
pub mod ics;
pub mod tracing;

pub use delivery::{Deliver, DeliveryError};
pub use escape::escape_text;
pub use event::EventDescriptor;
pub use fold::{fold_line, MAX_LINE_OCTETS};
pub use ics::{content_lines, serialize, IcsDocument, PRODID, UTF8_BOM};
pub use tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
