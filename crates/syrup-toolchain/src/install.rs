//! Download, unpack and build of the Syrup compiler from source.

use std::path::{Path, PathBuf};

use crate::error::ToolchainError;
use crate::probe::Prerequisites;
use crate::process::CommandSpec;

/// Where to fetch the compiler sources and what they unpack to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// URL of the source archive.
    pub archive_url: String,
    /// File name the archive is saved as inside the work directory.
    pub archive_name: String,
    /// Directory created by unpacking the archive.
    pub source_dir: String,
}

/// One stage of an installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    /// Progress label shown to the user.
    pub description: &'static str,
    /// Command executed for this stage.
    pub command: CommandSpec,
}

impl InstallPlan {
    /// Commands that perform the installation inside `workdir`, in order.
    #[must_use]
    pub fn steps(&self, workdir: &Path) -> Vec<InstallStep> {
        vec![
            InstallStep {
                description: "Downloading Syrup sources",
                command: CommandSpec::new("wget")
                    .args(["-O", self.archive_name.as_str(), self.archive_url.as_str()])
                    .current_dir(workdir),
            },
            InstallStep {
                description: "Unpacking archive",
                command: CommandSpec::new("unzip")
                    .args(["-o", self.archive_name.as_str()])
                    .current_dir(workdir),
            },
            InstallStep {
                description: "Building and installing with Cabal",
                command: CommandSpec::new("cabal")
                    .args(["install", "--overwrite-policy=always"])
                    .current_dir(self.source_path(workdir)),
            },
        ]
    }

    /// Directory the sources unpack to under `workdir`.
    #[must_use]
    pub fn source_path(&self, workdir: &Path) -> PathBuf {
        workdir.join(&self.source_dir)
    }

    /// Install the compiler into the Cabal bin directory.
    ///
    /// `on_step` is called before each stage starts.
    ///
    /// # Errors
    ///
    /// Returns [`ToolchainError::MissingPrerequisites`] without running
    /// anything when GHC or Cabal are absent, [`ToolchainError::Io`] if the
    /// work directory cannot be created, and the failing stage's error
    /// otherwise.
    pub fn install(
        &self,
        workdir: &Path,
        prerequisites: &Prerequisites,
        on_step: impl FnMut(&InstallStep),
    ) -> Result<(), ToolchainError> {
        let blockers = prerequisites.install_blockers();
        if !blockers.is_empty() {
            return Err(ToolchainError::MissingPrerequisites(blockers));
        }

        std::fs::create_dir_all(workdir)?;
        run_steps(&self.steps(workdir), on_step)?;

        tracing::info!(url = %self.archive_url, "Syrup installed");
        Ok(())
    }
}

/// Run steps in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the error of the first step that fails.
pub fn run_steps(
    steps: &[InstallStep],
    mut on_step: impl FnMut(&InstallStep),
) -> Result<(), ToolchainError> {
    for step in steps {
        on_step(step);
        tracing::info!(step = step.description, command = %step.command, "Install step");
        step.command.run()?;
    }
    Ok(())
}
