// SPDX-License-Identifier: PMPL-1.0-or-later
//! Diagnostic types produced by a lint run.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Rule id used for templates that are not well-formed XML
pub const SYNTAX_ERROR: &str = "syntax-error";

/// One reported finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File the finding belongs to
    pub file: PathBuf,
    /// Line in the file as written (1-indexed). Syntax errors carry their
    /// location inside the message instead.
    pub line: Option<usize>,
    /// Check identifier (e.g. "missing-link-target")
    pub rule_id: String,
    /// User-facing explanation
    pub message: String,
}

impl Diagnostic {
    /// Create a finding at a given line
    pub fn new(file: &Path, line: usize, rule_id: &str, message: &str) -> Self {
        Self {
            file: file.to_path_buf(),
            line: Some(line),
            rule_id: rule_id.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a syntax-error diagnostic; `message` already names the line
    pub fn syntax(file: &Path, message: String) -> Self {
        Self {
            file: file.to_path_buf(),
            line: None,
            rule_id: SYNTAX_ERROR.to_string(),
            message,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        self.rule_id == SYNTAX_ERROR
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{} {}", self.file.display(), line, self.message),
            None => write!(f, "{}: {}", self.file.display(), self.message),
        }
    }
}

/// Diagnostics of a whole run, in file-argument order
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosticSet {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Diagnostics raised by one rule
    pub fn by_rule(&self, rule_id: &str) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.rule_id == rule_id).collect()
    }

    /// Rendered `<file>:<line> <message>` lines
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

/// Process exit status for a finished run: 1 if anything was reported
pub fn exit_code(diagnostics: &DiagnosticSet) -> i32 {
    if diagnostics.is_empty() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line() {
        let d = Diagnostic::new(Path::new("page.pt"), 5, "missing-image-description", "msg");
        assert_eq!(d.to_string(), "page.pt:5 msg");
    }

    #[test]
    fn test_display_syntax_error() {
        let d = Diagnostic::syntax(Path::new("page.pt"), "bad token, line 1, column 1".into());
        assert!(d.is_syntax_error());
        assert_eq!(d.to_string(), "page.pt: bad token, line 1, column 1");
    }

    #[test]
    fn test_set_by_rule_and_exit_code() {
        let mut set = DiagnosticSet::new();
        assert_eq!(exit_code(&set), 0);

        set.add(Diagnostic::new(Path::new("a.pt"), 1, "missing-link-target", "a"));
        set.add(Diagnostic::new(Path::new("a.pt"), 2, "missing-image-description", "b"));
        set.add(Diagnostic::new(Path::new("b.pt"), 3, "missing-link-target", "c"));

        assert_eq!(set.len(), 3);
        assert_eq!(set.by_rule("missing-link-target").len(), 2);
        assert_eq!(set.lines(), vec!["a.pt:1 a", "a.pt:2 b", "b.pt:3 c"]);
        assert_eq!(exit_code(&set), 1);
    }
}
