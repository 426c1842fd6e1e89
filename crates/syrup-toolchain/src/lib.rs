//! External process plumbing for the Syrup toolchain.
//!
//! Everything here shells out to other programs:
//! - [`Compiler`]: runs `syrup -f <file>` and captures its stdout
//! - [`Prerequisites`]: probes GHC, Cabal, Graphviz and the compiler
//! - [`InstallPlan`]: downloads, unpacks and builds Syrup with Cabal
//!
//! Commands are described by [`CommandSpec`] and executed without a shell,
//! so file paths with spaces or quotes reach the program unchanged.

mod compiler;
mod error;
mod install;
mod probe;
mod process;

pub use compiler::Compiler;
pub use error::ToolchainError;
pub use install::{InstallPlan, InstallStep, run_steps};
pub use probe::{Prerequisites, ToolStatus, probe};
pub use process::CommandSpec;
