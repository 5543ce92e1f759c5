//! ICS document serialization.
//!
//! Turns an [`EventDescriptor`] into an RFC 5545 iCalendar document
//! containing exactly one VEVENT inside one VCALENDAR. The pipeline is
//! a pure function of the descriptor and the current wall-clock time:
//! build the ordered logical content lines, fold each to the 75-octet
//! limit, join with CRLF.


use chrono::{DateTime, Utc};

use crate::escape::escape_text;
use crate::event::EventDescriptor;
use crate::fold::fold_line;

/// Product identifier emitted on the `PRODID:` line.
pub const PRODID: &str = "-//calexport//calexport//EN";

/// UTF-8 byte order mark, prepended to the delivery payload as a
/// separate leading chunk. Some importing applications use it to
/// recognize the encoding.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Format of floating local date-time values (DTSTART, DTEND).
const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Format of the UTC DTSTAMP value.
const DTSTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// A fully assembled ICS document.
///
/// Holds the CRLF-terminated text without the BOM; the BOM only enters
/// the picture in [`IcsDocument::to_delivery_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsDocument {
    text: String,
}

impl IcsDocument {
    /// The document text: CRLF line endings throughout, including after
    /// the final line, no BOM.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The delivery payload: UTF-8 BOM chunk followed by the document
    /// bytes.
    pub fn to_delivery_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + self.text.len());
        bytes.extend_from_slice(UTF8_BOM);
        bytes.extend_from_slice(self.text.as_bytes());
        bytes
    }
}

/// Builds the ordered sequence of logical content lines for one event.
///
/// Fixed lines are emitted verbatim. TEXT-valued properties (UID,
/// SUMMARY, DESCRIPTION, LOCATION) are escaped; date-time values
/// (DTSTAMP, DTSTART, DTEND) never are. Empty title, location, or
/// description still emit their property with an empty value, so the
/// required properties are never skipped.
///
/// Pure function of the descriptor and `now` (which becomes DTSTAMP);
/// no line terminators are attached yet.
#[must_use]
pub fn content_lines(event: &EventDescriptor, now: DateTime<Utc>) -> Vec<String> {
    vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", escape_text(&event.uid)),
        format!("DTSTAMP:{}", now.format(DTSTAMP_FORMAT)),
        format!("DTSTART:{}", event.start.format(DATETIME_FORMAT)),
        format!("DTEND:{}", event.end.format(DATETIME_FORMAT)),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("DESCRIPTION:{}", escape_text(&event.description)),
        format!("LOCATION:{}", escape_text(&event.location)),
        "CLASS:PUBLIC".to_string(),
        "TRANSP:OPAQUE".to_string(),
        "STATUS:CONFIRMED".to_string(),
        "SEQUENCE:0".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]
}

/// Serializes one event into a complete ICS document.
///
/// Every logical line is folded to the 75-octet limit and lines are
/// joined with CRLF; the final line is CRLF-terminated too. Assembly is
/// all-or-nothing: the document only exists once fully built.
#[must_use]
pub fn serialize(event: &EventDescriptor, now: DateTime<Utc>) -> IcsDocument {
    let lines = content_lines(event, now);
    let mut text = String::new();
    for line in &lines {
        text.push_str(&fold_line(line));
        text.push_str("\r\n");
    }
    IcsDocument { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap()
    }

    fn wedding_event() -> EventDescriptor {
        EventDescriptor::new(
            "boda-veronica-emilio@calexport",
            "Boda de Verónica y Emilio",
            dt(2026, 6, 19, 18, 0),
            dt(2026, 6, 20, 4, 0),
        )
        .with_location("Finca Soto del Cerrolén")
        .with_description("Ceremonia, cóctel y fiesta.\nConfirma tu asistencia.")
    }

    #[test]
    fn property_order_is_fixed() {
        let lines = content_lines(&wedding_event(), fixed_now());
        let names: Vec<&str> = lines
            .iter()
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "BEGIN", "VERSION", "PRODID", "CALSCALE", "METHOD", "BEGIN", "UID", "DTSTAMP",
                "DTSTART", "DTEND", "SUMMARY", "DESCRIPTION", "LOCATION", "CLASS", "TRANSP",
                "STATUS", "SEQUENCE", "END", "END",
            ]
        );
    }

    #[test]
    fn exactly_one_vevent_block_closed_in_reverse_order() {
        let doc = serialize(&wedding_event(), fixed_now());
        let text = doc.as_str();
        assert_eq!(text.matches("BEGIN:VEVENT").count(), 1);
        assert_eq!(text.matches("END:VEVENT").count(), 1);
        let begin_vevent = text.find("BEGIN:VEVENT").unwrap();
        let end_vevent = text.find("END:VEVENT").unwrap();
        let end_vcalendar = text.find("END:VCALENDAR").unwrap();
        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(begin_vevent < end_vevent && end_vevent < end_vcalendar);
    }

    #[test]
    fn datetime_tokens_match_event_times() {
        let lines = content_lines(&wedding_event(), fixed_now());
        assert!(lines.contains(&"DTSTART:20260619T180000".to_string()));
        assert!(lines.contains(&"DTEND:20260620T040000".to_string()));
        assert!(lines.contains(&"DTSTAMP:20260115T123045Z".to_string()));
    }

    #[test]
    fn summary_has_no_unescaped_comma() {
        let event = EventDescriptor::new(
            "uid",
            "Cena, baile y más",
            dt(2026, 6, 19, 18, 0),
            dt(2026, 6, 20, 4, 0),
        );
        let lines = content_lines(&event, fixed_now());
        let summary = lines.iter().find(|l| l.starts_with("SUMMARY:")).unwrap();
        assert_eq!(summary, "SUMMARY:Cena\\, baile y más");
        assert!(!summary.replace("\\,", "").contains(','));
    }

    #[test]
    fn description_newline_becomes_literal_backslash_n() {
        let lines = content_lines(&wedding_event(), fixed_now());
        let description = lines
            .iter()
            .find(|l| l.starts_with("DESCRIPTION:"))
            .unwrap();
        assert!(description.contains("\\nConfirma"));
        assert!(!description.contains('\n'));
    }

    #[test]
    fn empty_optional_fields_still_emit_properties() {
        let event = EventDescriptor::new(
            "uid",
            "",
            dt(2026, 6, 19, 18, 0),
            dt(2026, 6, 20, 4, 0),
        );
        let lines = content_lines(&event, fixed_now());
        assert!(lines.contains(&"SUMMARY:".to_string()));
        assert!(lines.contains(&"DESCRIPTION:".to_string()));
        assert!(lines.contains(&"LOCATION:".to_string()));
    }

    #[test]
    fn long_description_folds_within_75_octets() {
        let event = wedding_event().with_description(
            "La ceremonia comenzará a las seis de la tarde en los jardines de la finca, \
             seguida de un cóctel al atardecer y una cena bajo las estrellas. Habrá \
             autobuses de vuelta a Madrid a las dos y a las cuatro de la madrugada."
                .to_string(),
        );
        let doc = serialize(&event, fixed_now());
        let physical: Vec<&str> = doc.as_str().split("\r\n").collect();
        assert!(physical.len() > 21, "expected at least 3 folded segments");
        for line in &physical {
            assert!(line.len() <= 75, "line has {} octets: {:?}", line.len(), line);
        }
    }

    #[test]
    fn document_ends_with_crlf() {
        let doc = serialize(&wedding_event(), fixed_now());
        assert!(doc.as_str().ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn delivery_bytes_lead_with_bom_chunk() {
        let doc = serialize(&wedding_event(), fixed_now());
        let bytes = doc.to_delivery_bytes();
        assert_eq!(&bytes[..3], UTF8_BOM);
        assert_eq!(&bytes[3..], doc.as_str().as_bytes());
        // The BOM is a payload chunk, not part of the document text.
        assert!(!doc.as_str().starts_with('\u{FEFF}'));
    }
}
