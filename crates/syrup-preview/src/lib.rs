//! Segmentation and HTML rendering of Syrup compiler output.
//!
//! The `syrup` compiler prints diagnostic text interleaved with SVG circuit
//! diagrams on stdout. This crate turns that stream into a standalone HTML page:
//! - [`sanitize`]: strips XML prologs, DOCTYPEs and comments from raw output
//! - [`segment`]: splits output into ordered [`Segment`]s (text vs. diagram)
//! - [`clean_diagram`]: removes comments and `<script>` blocks from one SVG
//! - [`DocumentRenderer`]: escapes text, inlines diagrams, wraps in a document
//!
//! Every function is pure. The caller buffers the complete compiler output
//! before handing it over.
//!
//! # Example
//!
//! ```
//! use syrup_preview::{DocumentRenderer, Preview};
//!
//! let preview = Preview::from_output("cost 2\n<svg><g/></svg>");
//! assert_eq!(preview.segments().len(), 2);
//!
//! let html = preview.render(&DocumentRenderer::new());
//! assert!(html.contains(r#"<div class="svg-container"><svg><g/></svg></div>"#));
//! ```

mod clean;
mod consts;
mod render;
mod sanitize;
mod segment;

pub use clean::clean_diagram;
pub use consts::DEFAULT_TITLE;
pub use render::{DocumentRenderer, escape_html, render_body};
pub use sanitize::sanitize;
pub use segment::{Segment, segment};

/// Segmented compiler output, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    segments: Vec<Segment>,
}

impl Preview {
    /// Sanitize and segment raw compiler output.
    #[must_use]
    pub fn from_output(raw: &str) -> Self {
        let sanitized = sanitize(raw);
        let segments = segment(&sanitized);
        tracing::debug!(
            raw_len = raw.len(),
            sanitized_len = sanitized.len(),
            segments = segments.len(),
            diagrams = segments.iter().filter(|s| s.is_diagram()).count(),
            "Segmented compiler output"
        );
        Self { segments }
    }

    /// Segments in output order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the preview, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Render the segments into an HTML document.
    #[must_use]
    pub fn render(&self, renderer: &DocumentRenderer) -> String {
        renderer.render(&self.segments)
    }
}

/// Run the whole pipeline with default renderer settings.
#[must_use]
pub fn render_output(raw: &str) -> String {
    Preview::from_output(raw).render(&DocumentRenderer::new())
}
