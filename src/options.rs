//! Configuration options for sanitization.
//!
//! The `Options` struct carries the tag denylist that decides which element
//! subtrees are removed wholesale before text extraction.

/// Configuration options for sanitization.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_sanitext::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert!(options.is_denylisted("SCRIPT"));
///
/// // Customize the denylist
/// let options = Options {
///     denylist: vec!["script".into(), "style".into(), "template".into()],
/// };
/// assert!(options.is_denylisted("template"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Tag names whose entire subtree is removed before text extraction.
    ///
    /// Matching is ASCII case-insensitive, so entries may be given in any
    /// case. Nothing inside a denylisted element's subtree (nested elements,
    /// text, comments) can reach the output.
    ///
    /// Subtrees are matched against the *parsed* tree. HTML5 recovery rules
    /// may relocate content out of an element that is misplaced in its
    /// source position - a `<noscript>` opened in `<head>` is closed at the
    /// first non-whitespace text, for example - and relocated content is
    /// then outside the subtree and survives. Raw-text elements such as
    /// `script` and `style` keep their content in all positions.
    ///
    /// Default: `["script", "style"]`
    pub denylist: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            denylist: vec!["script".to_string(), "style".to_string()],
        }
    }
}

impl Options {
    /// Checks whether `tag` is on the denylist, ignoring ASCII case.
    #[must_use]
    pub fn is_denylisted(&self, tag: &str) -> bool {
        self.denylist.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
