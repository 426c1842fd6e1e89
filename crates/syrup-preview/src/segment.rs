//! Splitting sanitized output into text and diagram segments.
//!
//! Diagram blocks are found with a shortest-match `<svg ... </svg>` scan rather
//! than a real XML parser. An `<svg>` nested inside another one therefore ends
//! the outer block at the inner closing tag.

use std::sync::LazyLock;

use regex::Regex;

use crate::clean::clean_diagram;

/// Shortest span from an opening `<svg` to the next `</svg>`.
static SVG_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg.*?</svg>").unwrap());

/// One unit of compiler output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Segment {
    /// Plain output text, displayed escaped.
    Text {
        /// Trimmed text content.
        content: String,
    },
    /// A cleaned SVG fragment, displayed as markup.
    Diagram {
        /// Cleaned `<svg>...</svg>` markup.
        content: String,
    },
}

impl Segment {
    /// Segment content regardless of kind.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } | Self::Diagram { content } => content,
        }
    }

    /// Whether this is a diagram segment.
    #[must_use]
    pub fn is_diagram(&self) -> bool {
        matches!(self, Self::Diagram { .. })
    }
}

/// Split sanitized output into an ordered list of segments.
///
/// Text between diagrams is trimmed and dropped when empty, so adjacent
/// diagrams produce no text segment between them. Diagram blocks are passed
/// through [`clean_diagram`].
///
/// # Examples
///
/// ```
/// use syrup_preview::segment;
///
/// let segments = segment("before<svg>inner</svg>after");
/// assert_eq!(segments.len(), 3);
/// assert!(segments[1].is_diagram());
/// ```
#[must_use]
pub fn segment(sanitized: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for block in SVG_BLOCK_RE.find_iter(sanitized) {
        push_text(&mut segments, &sanitized[cursor..block.start()]);
        segments.push(Segment::Diagram {
            content: clean_diagram(block.as_str()),
        });
        cursor = block.end();
    }
    push_text(&mut segments, &sanitized[cursor..]);

    segments
}

/// Push a text segment unless the trimmed text is empty.
fn push_text(segments: &mut Vec<Segment>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        segments.push(Segment::Text {
            content: text.to_owned(),
        });
    }
}
