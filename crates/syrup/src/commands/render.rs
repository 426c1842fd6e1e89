//! `syrup render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use syrup_config::{CliSettings, Config};
use syrup_preview::Preview;

use super::{document_renderer, write_document, write_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// File holding captured compiler output (default: stdin, also `-`).
    input: Option<PathBuf>,

    /// HTML file to write (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the output segments as JSON instead of HTML.
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Preview document title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Path to configuration file (default: auto-discover syrup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot be
    /// written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            title: self.title,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let raw = read_input(self.input.as_deref())?;
        let preview = Preview::from_output(&raw);

        if self.json {
            return write_json(&serde_json::to_value(preview.segments())?);
        }

        match self.output {
            Some(path) => {
                write_document(&preview, &config, &path)?;
                Output::new().success(&format!("Preview written to {}", path.display()));
            }
            None => {
                let html = preview.render(&document_renderer(&config)?);
                std::io::stdout().lock().write_all(html.as_bytes())?;
            }
        }
        Ok(())
    }
}

/// Read the whole input, from stdin when `path` is absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().lock().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
