//! `syrup check` command implementation.

use std::path::PathBuf;

use clap::Args;
use syrup_config::{CliSettings, Config};
use syrup_toolchain::Prerequisites;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Compiler executable (overrides config).
    #[arg(long, env = "SYRUP_COMPILER")]
    compiler: Option<String>,

    /// Path to configuration file (default: auto-discover syrup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Missing tools are reported, not treated as errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            compiler_command: self.compiler,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.highlight("Syrup toolchain");
        let prerequisites = Prerequisites::detect(&config.compiler.command);
        for tool in prerequisites.iter() {
            output.status(tool.is_present(), &tool.to_string());
        }

        if prerequisites.compiler.is_present() {
            if prerequisites.graphviz.is_present() {
                output.success("Ready to compile Syrup files.");
            } else {
                output.warning("Graphviz is not installed; diagrams will not be drawn.");
            }
        } else if prerequisites.can_install() {
            output.warning("Syrup is not installed. Run `syrup install` to build it.");
        } else {
            output.error(&format!(
                "Syrup is not installed and cannot be built without: {}",
                prerequisites.install_blockers().join(", ")
            ));
        }
        Ok(())
    }
}
