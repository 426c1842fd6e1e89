//! `${VAR}` substitution in config values.

use crate::ConfigError;

/// Substitute environment variables into a config value.
///
/// Supports `${VAR}` and `${VAR:-fallback}`. A value with no `${` at all is
/// taken literally, which keeps plain `$` characters intact. `field` is the
/// dotted config key, reported when a variable is unset and has no fallback.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| {
        std::env::var(name)
            .map(Some)
            .map_err(|_| UnsetVar(name.to_owned()))
    };
    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Name of a variable that had no value.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SYRUP_TEST_BIN", "/opt/syrup/bin/syrup");
        }
        let result = expand_env("${SYRUP_TEST_BIN}", "compiler.command").unwrap();
        assert_eq!(result, "/opt/syrup/bin/syrup");
        unsafe {
            std::env::remove_var("SYRUP_TEST_BIN");
        }
    }

    #[test]
    fn test_expand_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SYRUP_TEST_UNSET");
        }
        let result = expand_env("${SYRUP_TEST_UNSET:-syrup}", "compiler.command").unwrap();
        assert_eq!(result, "syrup");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SYRUP_TEST_HOME", "/home/dev");
        }
        let result = expand_env("${SYRUP_TEST_HOME}/.cabal/bin/syrup", "compiler.command").unwrap();
        assert_eq!(result, "/home/dev/.cabal/bin/syrup");
        unsafe {
            std::env::remove_var("SYRUP_TEST_HOME");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SYRUP_TEST_MISSING");
        }
        let err = expand_env("${SYRUP_TEST_MISSING}", "install.archive_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SYRUP_TEST_MISSING"));
        assert!(err.to_string().contains("install.archive_url"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand_env("$HOME/syrup", "f").unwrap(), "$HOME/syrup");
    }

    #[test]
    fn test_fallback_ignored_when_set() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SYRUP_TEST_MIRROR", "https://mirror.example/syrup.zip");
        }
        let result = expand_env(
            "${SYRUP_TEST_MIRROR:-https://github.com/x.zip}",
            "install.archive_url",
        )
        .unwrap();
        assert_eq!(result, "https://mirror.example/syrup.zip");
        unsafe {
            std::env::remove_var("SYRUP_TEST_MIRROR");
        }
    }
}
