//! Configuration management for the Syrup toolchain front-end.
//!
//! Parses `syrup.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `compiler.command`
//! - `install.archive_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use syrup_preview::DEFAULT_TITLE;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the compiler executable.
    pub compiler_command: Option<String>,
    /// Override the preview document title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "syrup.toml";

/// Keywords offered for completion when the config does not list any.
const DEFAULT_KEYWORDS: [&str; 5] = ["where", "type", "display", "cost", "experiment"];

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compiler invocation.
    pub compiler: CompilerConfig,
    /// Keyword completion.
    pub completion: CompletionConfig,
    /// Preview configuration (paths are relative strings from TOML).
    preview: PreviewConfigRaw,
    /// Toolchain installation.
    pub install: InstallConfig,

    /// Resolved preview configuration (set after loading).
    #[serde(skip)]
    pub preview_resolved: PreviewConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Compiler invocation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Compiler executable name or path.
    pub command: String,
    /// Arguments placed before the input file path.
    pub args: Vec<String>,
    /// File extension (without dot) accepted as compiler input.
    pub extension: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: "syrup".to_owned(),
            args: vec!["-f".to_owned()],
            extension: "syrup".to_owned(),
        }
    }
}

/// Keyword completion configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Keywords offered as completion items, in display order.
    pub keywords: Vec<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
        }
    }
}

/// Raw preview configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PreviewConfigRaw {
    title: Option<String>,
    stylesheet: Option<String>,
}

/// Resolved preview configuration with absolute paths.
#[derive(Debug)]
pub struct PreviewConfig {
    /// Title of the rendered document.
    pub title: String,
    /// Extra CSS file appended to the built-in styles.
    pub stylesheet: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            stylesheet: None,
        }
    }
}

/// Toolchain installation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// URL of the compiler source archive.
    pub archive_url: String,
    /// File name the archive is downloaded to.
    pub archive_name: String,
    /// Directory created by unpacking the archive.
    pub source_dir: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            archive_url: "https://github.com/pigworker/Syrup/archive/refs/heads/main.zip"
                .to_owned(),
            archive_name: "main.zip".to_owned(),
            source_dir: "Syrup-main".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`compiler.command`").
        field: String,
        /// Error message (e.g., "${`SYRUP_BIN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `syrup.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the loaded values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_from(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(command) = &settings.compiler_command {
            self.compiler.command.clone_from(command);
        }
        if let Some(title) = &settings.title {
            self.preview_resolved.title.clone_from(title);
        }
    }

    /// Search for a config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_compiler()?;
        self.validate_completion()?;
        require_non_empty(&self.preview_resolved.title, "preview.title")?;
        self.validate_install()?;
        Ok(())
    }

    fn validate_compiler(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.compiler.command, "compiler.command")?;
        require_non_empty(&self.compiler.extension, "compiler.extension")?;
        if self.compiler.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "compiler.extension must not start with a dot".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_completion(&self) -> Result<(), ConfigError> {
        for keyword in &self.completion.keywords {
            if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "completion.keywords entry {keyword:?} must be a single non-empty word"
                )));
            }
        }
        Ok(())
    }

    fn validate_install(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.install.archive_url, "install.archive_url")?;
        require_http_url(&self.install.archive_url, "install.archive_url")?;
        require_non_empty(&self.install.archive_name, "install.archive_name")?;
        require_non_empty(&self.install.source_dir, "install.source_dir")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.compiler.command = expand::expand_env(&self.compiler.command, "compiler.command")?;
        self.install.archive_url =
            expand::expand_env(&self.install.archive_url, "install.archive_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.preview_resolved = PreviewConfig {
            title: self
                .preview
                .title
                .clone()
                .unwrap_or_else(|| PreviewConfig::default().title),
            stylesheet: self
                .preview
                .stylesheet
                .as_deref()
                .map(|s| config_dir.join(s)),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.compiler.command, "syrup");
        assert_eq!(config.compiler.args, vec!["-f".to_owned()]);
        assert_eq!(config.compiler.extension, "syrup");
        assert_eq!(
            config.completion.keywords,
            vec!["where", "type", "display", "cost", "experiment"]
        );
        assert_eq!(config.preview_resolved.title, "Syrup Output");
        assert!(config.preview_resolved.stylesheet.is_none());
        assert_eq!(config.install.archive_name, "main.zip");
        assert_eq!(config.install.source_dir, "Syrup-main");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_default_title_matches_renderer() {
        assert_eq!(PreviewConfig::default().title, DEFAULT_TITLE);
        assert_eq!(
            Config::default().preview_resolved.title,
            syrup_preview::DocumentRenderer::new()
                .render(&[])
                .split("<title>")
                .nth(1)
                .and_then(|rest| rest.split("</title>").next())
                .unwrap()
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.compiler.command, "syrup");
        assert_eq!(config.completion.keywords.len(), 5);
    }

    #[test]
    fn test_parse_compiler_config() {
        let toml = r#"
[compiler]
command = "/usr/local/bin/syrup"
args = ["--file"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.compiler.command, "/usr/local/bin/syrup");
        assert_eq!(config.compiler.args, vec!["--file".to_owned()]);
        assert_eq!(config.compiler.extension, "syrup");
    }

    #[test]
    fn test_parse_completion_keywords() {
        let toml = r#"
[completion]
keywords = ["where", "experiment", "simulate"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.completion.keywords,
            vec!["where", "experiment", "simulate"]
        );
    }

    #[test]
    fn test_parse_install_config() {
        let toml = r#"
[install]
archive_url = "https://example.com/syrup.zip"
archive_name = "syrup.zip"
source_dir = "syrup-src"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.install.archive_url, "https://example.com/syrup.zip");
        assert_eq!(config.install.archive_name, "syrup.zip");
        assert_eq!(config.install.source_dir, "syrup-src");
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[preview]
title = "Circuits"
stylesheet = "styles/preview.css"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.preview_resolved.title, "Circuits");
        assert_eq!(
            config.preview_resolved.stylesheet,
            Some(PathBuf::from("/project/styles/preview.css"))
        );
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.preview_resolved.title, "Syrup Output");
        assert!(config.preview_resolved.stylesheet.is_none());
    }

    #[test]
    fn test_apply_cli_settings_compiler() {
        let mut config = Config::default();
        let overrides = CliSettings {
            compiler_command: Some("./syrup-dev".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.compiler.command, "./syrup-dev");
        assert_eq!(config.preview_resolved.title, "Syrup Output"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_title() {
        let mut config = Config::default();
        let overrides = CliSettings {
            title: Some("Adder".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.preview_resolved.title, "Adder");
        assert_eq!(config.compiler.command, "syrup"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.compiler.command, "syrup");
        assert_eq!(config.preview_resolved.title, "Syrup Output");
    }

    #[test]
    fn test_expand_env_vars_compiler_command() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SYRUP_CONFIG_TEST_BIN", "/opt/bin/syrup");
        }

        let toml = r#"
[compiler]
command = "${SYRUP_CONFIG_TEST_BIN}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.compiler.command, "/opt/bin/syrup");

        unsafe {
            std::env::remove_var("SYRUP_CONFIG_TEST_BIN");
        }
    }

    #[test]
    fn test_expand_env_vars_missing() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SYRUP_CONFIG_TEST_MIRROR");
        }

        let toml = r#"
[install]
archive_url = "${SYRUP_CONFIG_TEST_MIRROR}/main.zip"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("install.archive_url"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[compiler]
command = "syrup2"

[preview]
stylesheet = "extra.css"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.compiler.command, "syrup2");
        assert_eq!(
            config.preview_resolved.stylesheet,
            Some(dir.path().join("extra.css"))
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syrup.toml");
        std::fs::write(&path, "[compiler\ncommand = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syrup.toml");
        std::fs::write(&path, "[preview]\ntitle = \"From file\"\n").unwrap();

        let settings = CliSettings {
            title: Some("From CLI".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.preview_resolved.title, "From CLI");
    }

    #[test]
    fn test_load_rejects_empty_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syrup.toml");
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            compiler_command: Some(String::new()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(err.to_string().contains("compiler.command"));
    }

    #[test]
    fn test_discover_from_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("circuits/adders");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("syrup.toml"), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(dir.path().join("syrup.toml"))
        );
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("syrup.toml")).unwrap();

        assert_ne!(
            Config::discover_from(dir.path()),
            Some(dir.path().join("syrup.toml"))
        );
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_compiler_command_empty() {
        let mut config = Config::default();
        config.compiler.command = "  ".to_owned();
        assert_validation_error(&config, &["compiler.command", "empty"]);
    }

    #[test]
    fn test_validate_extension_with_dot() {
        let mut config = Config::default();
        config.compiler.extension = ".syrup".to_owned();
        assert_validation_error(&config, &["compiler.extension", "dot"]);
    }

    #[test]
    fn test_validate_keyword_with_whitespace() {
        let mut config = Config::default();
        config.completion.keywords.push("two words".to_owned());
        assert_validation_error(&config, &["completion.keywords", "two words"]);
    }

    #[test]
    fn test_validate_empty_keyword_list_passes() {
        let mut config = Config::default();
        config.completion.keywords.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_title_empty() {
        let mut config = Config::default();
        config.preview_resolved.title = String::new();
        assert_validation_error(&config, &["preview.title"]);
    }

    #[test]
    fn test_validate_archive_url_scheme() {
        let mut config = Config::default();
        config.install.archive_url = "ftp://example.com/main.zip".to_owned();
        assert_validation_error(&config, &["install.archive_url", "http"]);
    }

    #[test]
    fn test_validate_source_dir_empty() {
        let mut config = Config::default();
        config.install.source_dir = String::new();
        assert_validation_error(&config, &["install.source_dir"]);
    }
}
