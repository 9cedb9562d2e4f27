//! Non-fatal problems found while extracting shapes and composing icons.
//!
//! Unknown shape ids, malformed path data and unparseable colours do not
//! stop a run: the pipeline substitutes a placeholder and records a
//! diagnostic, which the CLI prints at the end.

use std::fmt;

use crate::output::Printer;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code (e.g. "icongrid::extract::unknown-shape").
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Ordered collection of diagnostics.
///
/// Identical diagnostics are recorded once, so a missing shape used by
/// hundreds of combinations is reported a single time.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    pub fn error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::error(code, message));
    }

    pub fn warning(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::warning(code, message));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Append everything from another collection.
    pub fn merge(&mut self, other: Diagnostics) {
        for diagnostic in other.diagnostics {
            self.push(diagnostic);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(diagnostics: &Diagnostics, printer: &Printer) {
    for d in diagnostics.iter() {
        let label = d.severity.to_string();
        let is_error = d.severity == Severity::Error;
        eprintln!(
            "{}[{}]: {}",
            printer.severity(&label, is_error),
            printer.dim(&d.code),
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("  help: {}", help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error("icongrid::test", "broken");
        diagnostics.warning("icongrid::test", "suspicious");

        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error("icongrid::extract::unknown-shape", "no such shape id `x`");
        diagnostics.error("icongrid::extract::unknown-shape", "no such shape id `x`");
        diagnostics.error("icongrid::extract::unknown-shape", "no such shape id `y`");

        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_merge() {
        let mut a = Diagnostics::new();
        a.error("icongrid::a", "error a");
        let mut b = Diagnostics::new();
        b.warning("icongrid::b", "warning b");
        b.error("icongrid::a", "error a");

        a.merge(b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_with_help() {
        let d = Diagnostic::error("icongrid::test", "bad colour").with_help("Use #RRGGBB");
        assert_eq!(d.help.as_deref(), Some("Use #RRGGBB"));
    }
}
