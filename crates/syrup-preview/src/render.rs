//! HTML document assembly for segmented compiler output.
//!
//! Text segments are escaped and wrapped in a pre-wrapped block; diagram
//! segments are inlined as markup. Both are emitted in segment order.

use std::fmt::Write;

use crate::consts::{BASE_STYLES, DEFAULT_TITLE, DIAGRAM_CLASS, TEXT_CLASS};
use crate::segment::Segment;

/// Escape the five HTML-reserved characters.
///
/// # Examples
///
/// ```
/// use syrup_preview::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}

/// Renders segments into a complete HTML document.
///
/// # Configuration
///
/// - [`title`](Self::title): document title (default: `Syrup Output`)
/// - [`extra_styles`](Self::extra_styles): CSS appended after the built-in styles
///
/// # Example
///
/// ```
/// use syrup_preview::{DocumentRenderer, Segment};
///
/// let segments = vec![Segment::Text { content: "ok".to_owned() }];
/// let html = DocumentRenderer::new().title("Adder").render(&segments);
/// assert!(html.contains("<title>Adder</title>"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    title: String,
    extra_styles: Option<String>,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer {
    /// Create a renderer with the default title and styles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            extra_styles: None,
        }
    }

    /// Set the document title. The title is escaped when rendered.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append custom CSS to the built-in style block.
    #[must_use]
    pub fn extra_styles(mut self, css: impl Into<String>) -> Self {
        self.extra_styles = Some(css.into());
        self
    }

    /// Render the segments into an HTML document.
    #[must_use]
    pub fn render(&self, segments: &[Segment]) -> String {
        let body = render_body(segments);
        let extra = self.extra_styles.as_deref().unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>{}</title><style>\n{BASE_STYLES}{extra}</style></head>\n<body>{body}</body>\n</html>\n",
            escape_html(&self.title),
        )
    }
}

/// Render segments into body markup, in order.
#[must_use]
pub fn render_body(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text { content } => write!(
                out,
                r#"<div class="{TEXT_CLASS}">{}</div>"#,
                escape_html(content)
            ),
            Segment::Diagram { content } => {
                write!(out, r#"<div class="{DIAGRAM_CLASS}">{content}</div>"#)
            }
        }
        .unwrap();
    }
    out
}
