//! DOM Operations Adapter
//!
//! Thin wrappers over the `dom_query` crate, which drives an html5ever-based
//! error-tolerant parser. Parsing never fails: any input, however malformed,
//! yields a document tree, with unterminated tags resolved by the HTML5
//! tree-construction recovery rules rather than leaked through as text.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document tree.
///
/// Always succeeds. Empty input produces a document with empty `html`,
/// `head` and `body` elements and no text; malformed fragments are recovered
/// per the HTML5 tree-construction algorithm.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Select the `html` root element of a parsed document.
///
/// The tree builder synthesizes `html`, `head` and `body` even for empty or
/// fragmentary input, so the selection is never empty.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

/// Get the tag name (normalized lowercase) of the first node in a selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of a node and its descendants, in document order.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Unlink the selected nodes, and with them their entire subtrees, from the
/// tree. A no-op for empty selections.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
