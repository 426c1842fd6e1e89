//! User-facing status lines on stderr.

use console::{Style, Term};

/// Styled message writer.
///
/// Everything goes to stderr, so stdout carries only HTML, JSON or
/// completion labels.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    warn: Style,
    fail: Style,
    heading: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    /// Progress message, unstyled.
    pub(crate) fn info(&self, msg: &str) {
        self.write(msg);
    }

    /// Completed action (green).
    pub(crate) fn success(&self, msg: &str) {
        self.write(&self.ok.apply_to(msg).to_string());
    }

    /// Recoverable problem (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.write(&self.warn.apply_to(msg).to_string());
    }

    /// Fatal problem (red).
    pub(crate) fn error(&self, msg: &str) {
        self.write(&self.fail.apply_to(msg).to_string());
    }

    /// Section heading or install step (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        self.write(&self.heading.apply_to(msg).to_string());
    }

    /// Tool check result, prefixed with a check mark or a cross.
    pub(crate) fn status(&self, ok: bool, msg: &str) {
        self.write(&self.status_line(ok, msg));
    }

    fn status_line(&self, ok: bool, msg: &str) -> String {
        let mark = if ok {
            self.ok.apply_to("✓")
        } else {
            self.fail.apply_to("✗")
        };
        format!("{mark} {msg}")
    }

    fn write(&self, line: &str) {
        // A closed stderr leaves nowhere to report the failure.
        let _ = self.term.write_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_marks() {
        let output = Output::new();

        let present = output.status_line(true, "Cabal (cabal): 3.10.1.0");
        assert!(present.contains('✓'));
        assert!(present.ends_with(" Cabal (cabal): 3.10.1.0"));

        let absent = output.status_line(false, "Graphviz (dot): not found");
        assert!(absent.contains('✗'));
        assert!(!absent.contains('✓'));
        assert!(absent.ends_with(" Graphviz (dot): not found"));
    }
}
