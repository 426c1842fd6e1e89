//! Invocation of the Syrup compiler on a source file.

use std::path::Path;

use crate::error::ToolchainError;
use crate::process::CommandSpec;

/// The configured compiler command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    command: String,
    args: Vec<String>,
}

impl Compiler {
    /// Create a compiler invocation. `args` come before the input path.
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Command line that compiles `input`.
    #[must_use]
    pub fn command_for(&self, input: &Path) -> CommandSpec {
        CommandSpec::new(&self.command).args(&self.args).arg(input)
    }

    /// Compile `input` and return everything it printed on stdout.
    ///
    /// # Errors
    ///
    /// Returns [`ToolchainError::Spawn`] if the compiler is not installed and
    /// [`ToolchainError::Failed`] (carrying the compiler's stderr) if it
    /// rejects the file.
    pub fn run(&self, input: &Path) -> Result<String, ToolchainError> {
        let spec = self.command_for(input);
        tracing::info!(command = %spec, "Running Syrup compiler");
        let stdout = spec.run_stdout()?;
        tracing::debug!(bytes = stdout.len(), "Compiler finished");
        Ok(stdout)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new("syrup", vec!["-f".to_owned()])
    }
}
