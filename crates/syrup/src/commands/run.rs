//! `syrup run` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use syrup_config::{CliSettings, Config};
use syrup_preview::Preview;
use syrup_toolchain::Compiler;

use super::{write_document, write_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the run command.
#[derive(Args)]
pub(crate) struct RunArgs {
    /// Syrup source file to compile.
    file: PathBuf,

    /// HTML file to write (default: next to the source, with an `.html` extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the output segments as JSON instead of writing HTML.
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Compiler executable (overrides config).
    #[arg(long, env = "SYRUP_COMPILER")]
    compiler: Option<String>,

    /// Preview document title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Path to configuration file (default: auto-discover syrup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RunArgs {
    /// Execute the run command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not a Syrup source, the compiler fails,
    /// or the preview cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            compiler_command: self.compiler,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        require_source_file(&self.file, &config.compiler.extension)?;

        output.info(&format!("Compiling {}...", self.file.display()));
        let compiler = Compiler::new(&config.compiler.command, config.compiler.args.clone());
        let stdout = compiler.run(&self.file)?;
        let preview = Preview::from_output(&stdout);

        if self.json {
            return write_json(&serde_json::to_value(preview.segments())?);
        }

        let target = self
            .output
            .unwrap_or_else(|| default_output_path(&self.file));
        write_document(&preview, &config, &target)?;

        output.success(&format!("Preview written to {}", target.display()));
        Ok(())
    }
}

/// Reject anything that is not an existing file with the configured extension.
fn require_source_file(path: &Path, extension: &str) -> Result<(), CliError> {
    if path.extension().and_then(|e| e.to_str()) != Some(extension) {
        return Err(CliError::Validation(format!(
            "{} is not a .{extension} file",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(CliError::Validation(format!(
            "File not found: {}",
            path.display()
        )));
    }
    Ok(())
}

/// `circuits/adder.syrup` becomes `circuits/adder.html`.
fn default_output_path(source: &Path) -> PathBuf {
    source.with_extension("html")
}
