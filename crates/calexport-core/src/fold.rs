//! RFC 5545 content line folding.
//!
//! Content lines are limited to 75 octets per physical line, excluding
//! the CRLF but including the leading space on continuation lines. The
//! limit is in octets, not characters, so folding has to walk the UTF-8
//! encoding and keep every cut on a code point boundary.

/// Maximum physical line length in octets (not characters) per RFC 5545.
pub const MAX_LINE_OCTETS: usize = 75;

/// Content budget of a continuation line: one octet is reserved for the
/// mandatory leading space.
const CONTINUATION_OCTETS: usize = MAX_LINE_OCTETS - 1;

/// Folds one logical content line into physical lines of at most 75
/// octets, joined with CRLF + a single space.
///
/// Lines of 75 octets or fewer come back unchanged. Longer lines are
/// cut on UTF-8 code point boundaries only: if the octet after a
/// proposed cut is a continuation byte (`0b10xxxxxx`), the cut moves
/// back until it lands on a boundary, which handles runs of up to three
/// continuation bytes (4-octet scalars such as emoji).
///
/// Stripping one leading space from every continuation segment and
/// concatenating reconstructs the input exactly.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let bytes = line.as_bytes();
    if bytes.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(bytes.len() + (bytes.len() / CONTINUATION_OCTETS + 1) * 3);
    let mut pos = 0;
    let mut first_segment = true;

    while pos < bytes.len() {
        let budget = if first_segment {
            MAX_LINE_OCTETS
        } else {
            CONTINUATION_OCTETS
        };
        let mut end = (pos + budget).min(bytes.len());

        // Back off until the cut lands on a code point boundary. A
        // continuation byte has its top two bits set to 10.
        while end < bytes.len() && (bytes[end] & 0xC0) == 0x80 {
            end -= 1;
        }

        if !first_segment {
            out.push_str("\r\n ");
        }
        // The slice bounds are code point boundaries by construction.
        out.push_str(&line[pos..end]);

        pos = end;
        first_segment = false;
    }

    out
}
