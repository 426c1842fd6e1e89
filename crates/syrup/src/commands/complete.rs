//! `syrup complete` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use syrup_completion::complete;
use syrup_config::Config;

use super::write_json;
use crate::error::CliError;

/// Arguments for the complete command.
#[derive(Args)]
pub(crate) struct CompleteArgs {
    /// Word typed so far (default: list every keyword).
    #[arg(default_value = "")]
    prefix: String,

    /// Print completion items as JSON.
    #[arg(long)]
    json: bool,

    /// Path to configuration file (default: auto-discover syrup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CompleteArgs {
    /// Execute the complete command.
    ///
    /// Labels are printed one per line on stdout for use in shell scripts
    /// and editor integrations.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let items = complete(&config.completion.keywords, &self.prefix);

        if self.json {
            return write_json(&serde_json::to_value(&items)?);
        }

        let mut stdout = std::io::stdout().lock();
        for item in &items {
            writeln!(stdout, "{}", item.label)?;
        }
        Ok(())
    }
}
