//! Detection of the tools the Syrup toolchain depends on.

use std::fmt;
use std::path::Path;

use crate::process::CommandSpec;

/// Presence of one external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    /// Human-readable tool name.
    pub label: &'static str,
    /// Program that was probed.
    pub program: String,
    /// First line of the version output, `None` if the tool is absent.
    pub version: Option<String>,
}

impl ToolStatus {
    /// Probe `program` and record the result under `label`.
    #[must_use]
    pub fn detect(label: &'static str, program: &str) -> Self {
        Self {
            label,
            program: program.to_owned(),
            version: probe(program),
        }
    }

    /// Whether the tool responded to its version query.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.version.is_some()
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) if !version.is_empty() => {
                write!(f, "{} ({}): {version}", self.label, self.program)
            }
            Some(_) => write!(f, "{} ({}): found", self.label, self.program),
            None => write!(f, "{} ({}): not found", self.label, self.program),
        }
    }
}

/// Status of every tool the front-end interacts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerequisites {
    /// Glasgow Haskell Compiler, needed to build Syrup.
    pub ghc: ToolStatus,
    /// Cabal, needed to build Syrup.
    pub cabal: ToolStatus,
    /// Graphviz `dot`, used by Syrup to draw diagrams.
    pub graphviz: ToolStatus,
    /// The Syrup compiler itself.
    pub compiler: ToolStatus,
}

impl Prerequisites {
    /// Probe all tools. `compiler` is the configured compiler command.
    #[must_use]
    pub fn detect(compiler: &str) -> Self {
        let prerequisites = Self {
            ghc: ToolStatus::detect("GHC (Glasgow Haskell Compiler)", "ghc"),
            cabal: ToolStatus::detect("Cabal", "cabal"),
            graphviz: ToolStatus::detect("Graphviz", "dot"),
            compiler: ToolStatus::detect("Syrup", compiler),
        };
        for tool in prerequisites.iter().filter(|t| !t.is_present()) {
            tracing::warn!(tool = tool.label, program = %tool.program, "Tool not found");
        }
        prerequisites
    }

    /// All tools, build dependencies first.
    pub fn iter(&self) -> impl Iterator<Item = &ToolStatus> {
        [&self.ghc, &self.cabal, &self.graphviz, &self.compiler].into_iter()
    }

    /// Build dependencies (GHC, Cabal, Graphviz) that are absent.
    #[must_use]
    pub fn missing_dependencies(&self) -> Vec<&ToolStatus> {
        [&self.ghc, &self.cabal, &self.graphviz]
            .into_iter()
            .filter(|t| !t.is_present())
            .collect()
    }

    /// Tools that must be present before an install can start.
    ///
    /// Graphviz is only needed at run time, so it does not block installation.
    #[must_use]
    pub fn install_blockers(&self) -> Vec<String> {
        [&self.ghc, &self.cabal]
            .into_iter()
            .filter(|t| !t.is_present())
            .map(|t| t.label.to_owned())
            .collect()
    }

    /// Whether installation can proceed.
    #[must_use]
    pub fn can_install(&self) -> bool {
        self.install_blockers().is_empty()
    }
}

/// Check whether `program` runs, returning the first line of its version output.
///
/// Graphviz `dot` is queried with `-V` (it prints to stderr); everything else
/// with `--version`. Returns `None` if the program cannot be started or exits
/// unsuccessfully.
#[must_use]
pub fn probe(program: &str) -> Option<String> {
    let spec = CommandSpec::new(program).arg(version_flag(program));
    match spec.run() {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let line = first_line(&stdout).or_else(|| first_line(&stderr));
            Some(line.unwrap_or_default().to_owned())
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "Probe failed");
            None
        }
    }
}

/// Version flag understood by `program`.
fn version_flag(program: &str) -> &'static str {
    let name = Path::new(program)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(program);
    if name == "dot" { "-V" } else { "--version" }
}

/// First non-blank line, trimmed.
fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}
