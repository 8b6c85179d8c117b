//! # rs-sanitext
//!
//! A markup-stripping HTML sanitizer that converts untrusted, possibly
//! malformed HTML into plain text safe for display.
//!
//! Naive tag stripping with pattern matching on `<...>` fails on incomplete
//! markup: given `<script without closing bracket`, a regex-based stripper
//! leaves the `<script` fragment in its output, where a downstream renderer
//! may later complete it into an executable tag. This crate instead builds a
//! real document tree with a browser-grade error-tolerant HTML5 parser,
//! removes entire subtrees rooted at dangerous elements (script and style by
//! default), and extracts the surviving text with entities decoded.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_sanitext::sanitize_to_text;
//!
//! let html = "<div><p>Nested <strong>HTML</strong> content</p></div>\
//!             <script>alert('xss')</script>";
//! assert_eq!(sanitize_to_text(html), "Nested HTML content");
//! ```
//!
//! ## Guarantees
//!
//! - Never fails and never panics, for any input of any length.
//! - Output contains no markup syntax and nothing that was inside a
//!   denylisted element's subtree, regardless of input well-formedness.
//! - Entities (`&amp;`, `&#64;`, `&#x40;`, ...) are decoded to literal
//!   characters; malformed entities pass through as-is.
//!
//! Each call parses its own tree and discards it afterwards; there is no
//! shared state, so concurrent calls need no coordination.

mod options;
mod sanitize;

/// DOM operations adapter over the `dom_query` crate.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use options::Options;

/// Sanitizes an HTML document or fragment into plain text using the default
/// denylist (`script`, `style`).
///
/// # Arguments
///
/// * `html` - The untrusted HTML as a string slice
///
/// # Returns
///
/// The concatenated text content of the document with denylisted subtrees
/// removed and HTML entities decoded. Empty input yields an empty string.
///
/// # Example
///
/// ```rust
/// use rs_sanitext::sanitize_to_text;
///
/// let text = sanitize_to_text("<p>Test &lt;script&gt; entity &amp; more</p>");
/// assert_eq!(text, "Test <script> entity & more");
/// ```
#[must_use]
pub fn sanitize_to_text(html: &str) -> String {
    sanitize_to_text_with_options(html, &Options::default())
}

/// Sanitizes an HTML document or fragment into plain text with a custom
/// denylist.
///
/// Denylist matching runs on the parsed tree; see [`Options::denylist`] for
/// how HTML5 recovery affects elements that are misplaced in their source
/// position.
///
/// # Arguments
///
/// * `html` - The untrusted HTML as a string slice
/// * `options` - Configuration carrying the tag denylist
///
/// # Example
///
/// ```rust
/// use rs_sanitext::{sanitize_to_text_with_options, Options};
///
/// let options = Options {
///     denylist: vec!["script".into(), "style".into(), "noscript".into()],
/// };
/// let text = sanitize_to_text_with_options(
///     "<p>ok</p><noscript>enable javascript</noscript>",
///     &options,
/// );
/// assert_eq!(text, "ok");
/// ```
#[must_use]
pub fn sanitize_to_text_with_options(html: &str, options: &Options) -> String {
    sanitize::sanitize_document(html, options)
}

/// Sanitizes HTML bytes into plain text, with automatic encoding detection.
///
/// The charset is sniffed from `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" ...>` declarations and the input is
/// transcoded to UTF-8 before sanitization. Invalid byte sequences become
/// U+FFFD replacement characters rather than errors.
///
/// # Example
///
/// ```rust
/// use rs_sanitext::sanitize_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
///              <body>Caf\xE9<script>x</script></body></html>";
/// assert_eq!(sanitize_bytes(html), "Caf\u{e9}");
/// ```
#[must_use]
pub fn sanitize_bytes(html: &[u8]) -> String {
    let html_str = encoding::transcode_to_utf8(html);
    sanitize_to_text(&html_str)
}

/// Sanitizes HTML bytes into plain text with a custom denylist and automatic
/// encoding detection.
#[must_use]
pub fn sanitize_bytes_with_options(html: &[u8], options: &Options) -> String {
    let html_str = encoding::transcode_to_utf8(html);
    sanitize_to_text_with_options(&html_str, options)
}
