//! Toolchain error types.

use std::process::ExitStatus;

/// Error running an external toolchain command.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// The command could not be started (usually not installed or not on `PATH`).
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted.
        command: String,
        /// Underlying spawn error.
        source: std::io::Error,
    },
    /// The command ran but exited unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        /// Command line that failed.
        command: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Trimmed standard error output.
        stderr: String,
    },
    /// Required tools are missing, so installation was not attempted.
    #[error("Installation aborted, missing prerequisites: {}", .0.join(", "))]
    MissingPrerequisites(Vec<String>),
    /// I/O error outside of process execution.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
