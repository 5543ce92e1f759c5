//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/calexport/config.toml` by default:
//!
//! ```toml
//! [event]
//! title = "Boda de Verónica y Emilio"
//! start = "2026-06-19T18:00:00"
//! end = "2026-06-20T04:00:00"
//! location = "Finca Soto del Cerrolén"
//! description = "Ceremonia y fiesta.\nConfirma tu asistencia."
//!
//! [output]
//! directory = "."
//! ```
//!
//! Timestamps are floating local times: `YYYY-MM-DDTHH:MM:SS` or the
//! compact ICS form `YYYYMMDDTHHMMSS`. Embedded newlines in the
//! description should be LF, not CRLF.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use calexport_core::EventDescriptor;

use crate::error::{ExportError, ExportResult};

/// Accepted timestamp formats, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y%m%dT%H%M%S"];

/// Configuration for the calexport CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// The event to export.
    pub event: EventSettings,

    /// Output settings.
    pub output: OutputSettings,
}

/// The event description as written in the config file.
///
/// Timestamps stay as strings here; they are parsed and validated when
/// the settings are turned into an [`EventDescriptor`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Event title.
    pub title: String,

    /// Event start, floating local time.
    pub start: String,

    /// Event end, floating local time.
    pub end: String,

    /// Venue or address.
    pub location: String,

    /// Free-form description. May contain LF newlines and URLs.
    pub description: String,

    /// Stable event identifier. Derived from the title when unset.
    pub uid: Option<String>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the .ics file is written to. Defaults to the current
    /// directory.
    pub directory: Option<PathBuf>,

    /// Filename override. Defaults to a slug of the event title.
    pub filename: Option<String>,
}

impl ExportConfig {
    /// Loads configuration from the default path.
    pub fn load() -> ExportResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> ExportResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExportError::Config(format!("failed to read config: {}", e)))?;
        toml::from_str(&content)
            .map_err(|e| ExportError::Config(format!("failed to parse config: {}", e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calexport")
    }
}

impl EventSettings {
    /// Validates the settings and builds the descriptor the serializer
    /// works from.
    ///
    /// The serializer itself assumes well-formed input, so all
    /// validation happens here: timestamps must parse, and the event
    /// must end after it starts.
    pub fn to_descriptor(&self) -> ExportResult<EventDescriptor> {
        if self.title.is_empty() && self.start.is_empty() {
            return Err(ExportError::Config(
                "no event configured; set [event] in the config file or pass --title/--start/--end"
                    .to_string(),
            ));
        }

        let start = parse_timestamp(&self.start)
            .ok_or_else(|| ExportError::Event(format!("invalid start timestamp: {:?}", self.start)))?;
        let end = parse_timestamp(&self.end)
            .ok_or_else(|| ExportError::Event(format!("invalid end timestamp: {:?}", self.end)))?;
        if end <= start {
            return Err(ExportError::Event(format!(
                "event must end after it starts ({} >= {})",
                start, end
            )));
        }

        let uid = match &self.uid {
            Some(uid) if !uid.is_empty() => uid.clone(),
            _ => derive_uid(&self.title),
        };

        Ok(EventDescriptor::new(uid, &self.title, start, end)
            .with_location(&self.location)
            .with_description(&self.description))
    }
}

/// Parses a floating local timestamp in one of the accepted formats.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Derives a stable UID from the event title.
///
/// Deterministic, so re-exporting the same event produces the same UID
/// and importing applications can deduplicate. Never time-derived.
fn derive_uid(title: &str) -> String {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        "event@calexport".to_string()
    } else {
        format!("{}@calexport", slug)
    }
}
