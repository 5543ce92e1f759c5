//! RFC 5545 TEXT value escaping.
//!
//! Property values of type TEXT (SUMMARY, DESCRIPTION, LOCATION, UID)
//! must escape backslash, semicolon, comma, and newline before being
//! placed on a content line. Date-time values (DTSTAMP, DTSTART, DTEND)
//! are never escaped.

/// Escapes a TEXT property value per RFC 5545 Section 3.3.11.
///
/// Escapes, in effect-order: `\` to `\\`, `;` to `\;`, `,` to `\,`, and
/// LF to the literal two characters `\n`. Each input character is
/// visited once, so introduced backslashes are never re-escaped.
///
/// Carriage returns pass through untouched: embedded newlines are
/// assumed already normalized to `\n` by the caller.
///
/// Total function; never fails, and an empty input yields an empty
/// output.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
