//! The event descriptor handed to the ICS serializer.
//!
//! An [`EventDescriptor`] is an immutable value describing exactly one
//! calendar event. It is constructed fresh per export action; the
//! serializer in [`crate::ics`] is a pure function of a descriptor and
//! the current wall-clock time, so nothing here is cached or shared
//! between exports.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single calendar event to be serialized into an ICS document.
///
/// Start and end times are floating local times (no timezone offset),
/// matching the `YYYYMMDDTHHMMSS` date-time form they serialize to.
/// `description` may contain embedded `\n` newlines and URLs; callers
/// are expected to have normalized `\r\n` to `\n` beforehand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    /// Event title, serialized as `SUMMARY`.
    pub title: String,
    /// Event start, floating local time.
    pub start: NaiveDateTime,
    /// Event end, floating local time.
    pub end: NaiveDateTime,
    /// Venue or address, serialized as `LOCATION`. May be empty.
    pub location: String,
    /// Free-form description, serialized as `DESCRIPTION`. May be empty.
    pub description: String,
    /// Stable identifier for the logical event, serialized as `UID`.
    ///
    /// Keeping this stable across exports lets importing applications
    /// deduplicate re-imports of the same event.
    pub uid: String,
}

impl EventDescriptor {
    /// Creates a descriptor with the required fields.
    ///
    /// Location and description start out empty; use the `with_*`
    /// builders to fill them in.
    pub fn new(
        uid: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            location: String::new(),
            description: String::new(),
            uid: uid.into(),
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Derives a deterministic, ASCII-safe filename from the title.
    ///
    /// Accented characters are transliterated rather than dropped
    /// (`Verónica` becomes `veronica`). Titles that slugify to nothing
    /// fall back to `event.ics`.
    pub fn suggested_filename(&self) -> String {
        let slug = slug::slugify(&self.title);
        if slug.is_empty() {
            "event.ics".to_string()
        } else {
            format!("{}.ics", slug)
        }
    }
}
