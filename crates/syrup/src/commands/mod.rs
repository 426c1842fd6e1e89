//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod complete;
pub(crate) mod install;
pub(crate) mod render;
pub(crate) mod run;

use std::io::Write;
use std::path::Path;

use syrup_config::Config;
use syrup_preview::{DocumentRenderer, Preview};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use complete::CompleteArgs;
pub(crate) use install::InstallArgs;
pub(crate) use render::RenderArgs;
pub(crate) use run::RunArgs;

/// Build the document renderer from the `[preview]` config section.
fn document_renderer(config: &Config) -> Result<DocumentRenderer, CliError> {
    let mut renderer = DocumentRenderer::new().title(&config.preview_resolved.title);
    if let Some(path) = &config.preview_resolved.stylesheet {
        let css = std::fs::read_to_string(path).map_err(|e| {
            CliError::Validation(format!(
                "Failed to read stylesheet {}: {e}",
                path.display()
            ))
        })?;
        renderer = renderer.extra_styles(css);
    }
    Ok(renderer)
}

/// Render `preview` as an HTML document and write it to `path`.
fn write_document(preview: &Preview, config: &Config, path: &Path) -> Result<(), CliError> {
    let html = preview.render(&document_renderer(config)?);
    std::fs::write(path, html)?;
    Ok(())
}

/// Pretty-print `value` as JSON on stdout.
fn write_json(value: &serde_json::Value) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
