//! Constants for preview rendering.
//!
//! Only [`DEFAULT_TITLE`] is re-exported; class names and styles stay private
//! to the renderer.

/// Default document title.
pub const DEFAULT_TITLE: &str = "Syrup Output";

/// CSS class of the container wrapping a text segment.
pub const TEXT_CLASS: &str = "output-text";

/// CSS class of the container wrapping a diagram segment.
pub const DIAGRAM_CLASS: &str = "svg-container";

/// Base style block embedded in every rendered document.
///
/// Colors fall back to fixed values when the page is not hosted inside an
/// editor webview that defines the `--vscode-*` variables.
pub const BASE_STYLES: &str = "\
body { font-family: 'Courier New', monospace; color: var(--vscode-editor-foreground, #1e1e1e); background-color: var(--vscode-editor-background, #ffffff); }
.output-text { white-space: pre-wrap; padding: 10px; margin-bottom: 20px; }
.svg-container svg { max-width: 100%; border: 1px solid var(--vscode-editorLineNumber-activeForeground, #c6c6c6); }
";
