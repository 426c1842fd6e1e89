//! Removal of XML noise from raw compiler output.
//!
//! The compiler prints diagrams as standalone SVG documents, each with its own
//! `<?xml ...?>` prolog, `<!DOCTYPE ...>` and generator comments. None of that
//! belongs in an HTML page, so it is stripped before segmentation.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an XML prolog declaration and the whitespace after it.
static XML_PROLOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\?xml[^>]*\?>\s*").unwrap());

/// Matches a DOCTYPE declaration and the whitespace after it.
static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!DOCTYPE[^>]*>\s*").unwrap());

/// Matches a comment block (possibly spanning lines) and the whitespace after it.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->\s*").unwrap());

/// Strip XML prologs, DOCTYPE declarations and comments from raw output.
///
/// Removal repeats until nothing matches, so the result is a fixed point:
/// `sanitize(&sanitize(s)) == sanitize(s)` for every input. Outer whitespace
/// is trimmed.
///
/// # Examples
///
/// ```
/// use syrup_preview::sanitize;
///
/// let raw = "<?xml version=\"1.0\"?>\n<!-- generated -->\nresult: 1\n";
/// assert_eq!(sanitize(raw), "result: 1");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut current = raw.to_owned();
    while let Some(stripped) = strip_noise(&current) {
        current = stripped;
    }
    current.trim().to_owned()
}

/// Run one removal pass. Returns `None` if nothing was removed.
fn strip_noise(s: &str) -> Option<String> {
    let without_prolog = XML_PROLOG_RE.replace_all(s, "");
    let without_doctype = DOCTYPE_RE.replace_all(&without_prolog, "");
    let stripped = COMMENT_RE.replace_all(&without_doctype, "").into_owned();

    // Every pattern match is non-empty, so an unchanged length means no match.
    (stripped.len() != s.len()).then_some(stripped)
}
