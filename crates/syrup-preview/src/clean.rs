//! Cleaning of individual SVG fragments before they are inlined into HTML.
//!
//! Diagram markup is inserted into the document without escaping, so this is
//! the only place executable content can be kept out of the page. The pass is
//! tag based: `<script>` blocks are removed, while event-handler attributes and
//! `<foreignObject>` content are left untouched.

use std::sync::LazyLock;

use regex::Regex;

/// Prolog, doctype, comment and script blocks, all case-insensitive.
static DIAGRAM_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\?xml[^>]*\?>|<!DOCTYPE[^>]*>|<!--.*?-->|<script.*?</script>").unwrap()
});

/// Strip prolog, doctype, comments and `<script>` blocks from an SVG fragment.
///
/// Outer whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use syrup_preview::clean_diagram;
///
/// let svg = "<svg><script>alert(1)</script><rect/></svg>";
/// assert_eq!(clean_diagram(svg), "<svg><rect/></svg>");
/// ```
#[must_use]
pub fn clean_diagram(fragment: &str) -> String {
    DIAGRAM_NOISE_RE.replace_all(fragment, "").trim().to_owned()
}
