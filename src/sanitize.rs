//! The sanitization pipeline: parse, remove denylisted subtrees, extract text.
//!
//! Three stages over one short-lived tree. The parser builds a document from
//! arbitrary input without failing, the remover unlinks every denylisted
//! element together with its whole subtree, and the extractor concatenates
//! the text nodes that survive, in document order. Nothing is inserted at
//! element boundaries; entity decoding already happened in the tokenizer, so
//! surviving text nodes hold literal characters.

use crate::dom::{self, Document, NodeRef, Selection};
use crate::options::Options;

/// Runs the full pipeline over one input.
pub fn sanitize_document(html: &str, options: &Options) -> String {
    let doc = dom::parse(html);
    remove_denylisted(&doc, options);
    extract_text(&doc)
}

/// Unlinks every element whose tag name is on the denylist, along with its
/// entire subtree. Nested elements, text and comments below a denylisted
/// element are all unreachable afterwards.
///
/// Matching is ASCII case-insensitive against the parser-normalized tag name,
/// so `<SCRIPT>` and a caller-supplied `"Script"` entry both match.
pub(crate) fn remove_denylisted(doc: &Document, options: &Options) {
    if options.denylist.is_empty() {
        return;
    }

    let root = dom::root(doc);
    let Some(root_node) = root.nodes().first().copied() else {
        return;
    };

    // Collect first, unlink after: the traversal must not observe its own
    // mutations. Unlinking a node whose ancestor is already unlinked is fine.
    let mut doomed: Vec<NodeRef> = Vec::new();
    for node in root_node.descendants() {
        if !node.is_element() {
            continue;
        }
        let sel = Selection::from(node);
        if dom::tag_name(&sel).is_some_and(|tag| options.is_denylisted(&tag)) {
            doomed.push(node);
        }
    }

    for node in doomed {
        dom::remove(&Selection::from(node));
    }
}

/// Concatenates the character data of all remaining text nodes in document
/// (pre-order, depth-first) order. Element boundaries and comment nodes
/// contribute no characters; an empty or fully-removed tree yields the
/// empty string.
pub(crate) fn extract_text(doc: &Document) -> String {
    dom::text_content(&dom::root(doc)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_denylisted_drops_whole_subtree() {
        let doc = dom::parse(
            "<div><script>var a = '<p>looks safe</p>';</script><p>kept</p></div>",
        );
        remove_denylisted(&doc, &Options::default());

        assert!(doc.select("script").is_empty());
        assert_eq!(extract_text(&doc), "kept");
    }

    #[test]
    fn remove_denylisted_matches_uppercase_tags() {
        let doc = dom::parse("<SCRIPT>alert(1)</SCRIPT><p>ok</p>");
        remove_denylisted(&doc, &Options::default());
        assert_eq!(extract_text(&doc), "ok");
    }

    #[test]
    fn remove_denylisted_with_empty_denylist_keeps_everything() {
        let doc = dom::parse("<p>a</p><span>b</span>");
        remove_denylisted(&doc, &Options { denylist: vec![] });
        assert_eq!(extract_text(&doc), "ab");
    }

    #[test]
    fn remove_denylisted_handles_nested_denylisted_elements() {
        // Both section and article are collected; unlinking the article
        // after its section is already detached must be a no-op.
        let options = Options {
            denylist: vec!["section".to_string(), "article".to_string()],
        };
        let doc = dom::parse("<section>a<article>b</article>c</section>keep");
        remove_denylisted(&doc, &options);
        assert_eq!(extract_text(&doc), "keep");
    }

    #[test]
    fn script_markup_inside_style_goes_with_the_style_subtree() {
        // Inside <style> the tokenizer is in raw text mode, so the inner
        // "<script>" is stylesheet payload, not an element.
        let doc = dom::parse("<div><style>s1<script>s2</script></style>text</div>");
        remove_denylisted(&doc, &Options::default());
        let text = extract_text(&doc);
        assert!(!text.contains("s1"));
        assert!(!text.contains("s2"));
        assert!(text.contains("text"));
    }

    #[test]
    fn extract_text_preserves_document_order() {
        let doc = dom::parse("<div>one <em>two</em> three</div><p>four</p>");
        // No separator is inserted between the div and p boundaries.
        assert_eq!(extract_text(&doc), "one two threefour");
    }

    #[test]
    fn extract_text_skips_comments() {
        let doc = dom::parse("<div>a<!-- secret -->b</div>");
        assert_eq!(extract_text(&doc), "ab");
    }

    #[test]
    fn extract_text_of_empty_document_is_empty() {
        let doc = dom::parse("");
        assert_eq!(extract_text(&doc), "");
    }

    #[test]
    fn sanitize_document_runs_all_three_stages() {
        let out = sanitize_document(
            "<div>Safe</div> <script>bad</script> <p>More safe</p>",
            &Options::default(),
        );
        assert!(out.contains("Safe"));
        assert!(out.contains("More safe"));
        assert!(!out.contains("bad"));
    }
}
