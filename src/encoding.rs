//! Character encoding detection and transcoding.
//!
//! Untrusted HTML arrives as bytes in whatever encoding the producer chose.
//! This module sniffs the charset declaration from the document head and
//! converts to UTF-8 lossily, so the sanitizer upstream only ever sees valid
//! UTF-8 and never fails on byte-level garbage.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How many leading bytes to scan for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Matches `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Matches `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Detect the character encoding declared by an HTML document.
///
/// Scans the first kilobyte for `<meta charset="...">`, then for the legacy
/// `http-equiv` form, and resolves the label through the WHATWG encoding
/// registry. Falls back to UTF-8 when nothing is declared or the label is
/// unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);

    for re in [&META_CHARSET_RE, &HTTP_EQUIV_CHARSET_RE] {
        if let Some(label) = re.captures(&head).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than reported; the
/// sanitizer's contract is total and transcoding must be too.
///
/// # Examples
///
/// ```
/// use rs_sanitext::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
