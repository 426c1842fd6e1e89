//! Keyword completion for Syrup source files.
//!
//! Editors ask for completions with the word typed so far; [`complete`]
//! answers with the configured keywords that extend it.
//!
//! ```
//! use syrup_completion::complete;
//!
//! let keywords = ["where", "type", "display", "cost", "experiment"];
//! let labels: Vec<_> = complete(&keywords, "e").into_iter().map(|i| i.label).collect();
//! assert_eq!(labels, ["experiment"]);
//! ```

use std::collections::HashSet;

/// What a completion item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompletionKind {
    /// A language keyword.
    Keyword,
}

/// A single completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompletionItem {
    /// Text inserted when the item is accepted.
    pub label: String,
    /// Category shown next to the label.
    pub kind: CompletionKind,
}

impl CompletionItem {
    /// Keyword item inserting `label` verbatim.
    #[must_use]
    pub fn keyword(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: CompletionKind::Keyword,
        }
    }
}

/// Keywords starting with `prefix`, in the order given, each at most once.
///
/// An empty prefix matches every keyword. Matching is case-sensitive.
#[must_use]
pub fn complete<S: AsRef<str>>(keywords: &[S], prefix: &str) -> Vec<CompletionItem> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|k| k.starts_with(prefix) && seen.insert(*k))
        .map(CompletionItem::keyword)
        .collect()
}
