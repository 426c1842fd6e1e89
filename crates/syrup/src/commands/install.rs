//! `syrup install` command implementation.

use std::path::PathBuf;

use clap::Args;
use syrup_config::{Config, InstallConfig};
use syrup_toolchain::{InstallPlan, Prerequisites};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the install command.
#[derive(Args)]
pub(crate) struct InstallArgs {
    /// Directory to download and build in.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Path to configuration file (default: auto-discover syrup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl InstallArgs {
    /// Execute the install command.
    ///
    /// # Errors
    ///
    /// Returns an error if GHC or Cabal are missing or any build step fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let prerequisites = Prerequisites::detect(&config.compiler.command);
        for tool in prerequisites.missing_dependencies() {
            output.warning(&format!("Warning: {} is not installed.", tool.label));
        }

        let plan = install_plan(&config.install);
        output.info(&format!(
            "Installing Syrup from {} into {}",
            plan.archive_url,
            self.dir.display()
        ));
        plan.install(&self.dir, &prerequisites, |step| {
            output.highlight(&format!("{}: {}", step.description, step.command));
        })?;

        output.success("Syrup installed successfully!");
        Ok(())
    }
}

fn install_plan(install: &InstallConfig) -> InstallPlan {
    InstallPlan {
        archive_url: install.archive_url.clone(),
        archive_name: install.archive_name.clone(),
        source_dir: install.source_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_install_plan_from_defaults() {
        let plan = install_plan(&InstallConfig::default());
        assert_eq!(
            plan.archive_url,
            "https://github.com/pigworker/Syrup/archive/refs/heads/main.zip"
        );
        assert_eq!(plan.archive_name, "main.zip");
        assert_eq!(plan.source_dir, "Syrup-main");
    }
}
