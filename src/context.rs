// SPDX-License-Identifier: PMPL-1.0-or-later
//! Per-file parse context.
//!
//! Templates are frequently fragments and use HTML entities such as
//! `&nbsp;` that plain XML does not know. A file without a doctype is
//! wrapped in a synthetic one declaring those entities, and every line
//! number reported afterwards is shifted back so it points into the file
//! as written.

use crate::checks::Check;
use crate::diagnostic::Diagnostic;
use crate::error::{LintError, Result};
use regex::{Captures, Regex};
use roxmltree::{Document, Node, ParsingOptions, TextPos};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Doctype injected in front of templates that have none
const DOCTYPE_WRAPPER: &str = "<!DOCTYPE html [<!ENTITY nbsp 'no-break space'>\n\
<!ENTITY times 'multiplication sign'>]>\n";

/// Marker whose presence means the template brings its own doctype
const DOCTYPE_MARKER: &str = "<!DOCTYPE";

/// One template file being linted
#[derive(Debug)]
pub struct Context {
    path: PathBuf,
    content: String,
    line_offset: usize,
    exclude: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Context {
    /// Read `path` and prepare it for parsing
    pub fn new(path: &Path, exclude: Option<&str>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(path, content, exclude))
    }

    /// Prepare in-memory template source that claims to come from `path`
    pub fn from_source(path: &Path, content: String, exclude: Option<&str>) -> Self {
        let (content, line_offset) = if content.contains(DOCTYPE_MARKER) {
            (content, 0)
        } else {
            (
                format!("{}{}", DOCTYPE_WRAPPER, content),
                DOCTYPE_WRAPPER.lines().count(),
            )
        };

        Self {
            path: path.to_path_buf(),
            content,
            line_offset,
            exclude: exclude.map(String::from),
            diagnostics: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Source handed to the parser, including any injected doctype
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines injected in front of the file
    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    /// Whether the exclusion prefix disables the checks for this file
    pub fn is_excluded(&self) -> bool {
        self.exclude
            .as_deref()
            .is_some_and(|prefix| self.path.to_string_lossy().starts_with(prefix))
    }

    /// Parse the template and run `checks` against it.
    ///
    /// A template that is not well-formed yields a single syntax-error
    /// diagnostic and no check runs. Excluded files are parsed but not
    /// checked.
    pub fn run(mut self, checks: &[Box<dyn Check>]) -> Vec<Diagnostic> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        let document = match Document::parse_with_options(&self.content, options) {
            Ok(document) => document,
            Err(err) => {
                let message =
                    correct_line_numbers(&syntax_message(&err, &self.content), self.line_offset);
                debug!("{}: not well-formed: {}", self.path.display(), message);
                self.diagnostics.push(Diagnostic::syntax(&self.path, message));
                return self.diagnostics;
            }
        };

        if self.is_excluded() {
            debug!("{}: checks excluded by prefix", self.path.display());
            return self.diagnostics;
        }

        let mut reporter = Reporter {
            file: &self.path,
            line_offset: self.line_offset,
            diagnostics: &mut self.diagnostics,
        };
        for check in checks {
            debug!("{}: {} ({})", self.path.display(), check.name(), check.description());
            check.check(document.root_element(), &mut reporter);
        }

        self.diagnostics
    }
}

/// Sink the checks report findings into
pub struct Reporter<'c> {
    file: &'c Path,
    line_offset: usize,
    diagnostics: &'c mut Vec<Diagnostic>,
}

impl Reporter<'_> {
    /// Record a finding at the source line of `node`
    pub fn report(&mut self, node: Node<'_, '_>, rule_id: &str, message: &str) {
        let row = node.document().text_pos_at(node.range().start).row as usize;
        let line = row.saturating_sub(self.line_offset);
        self.diagnostics
            .push(Diagnostic::new(self.file, line, rule_id, message));
    }
}

/// Render a parser error with its location spelled `line R, column C`,
/// the form [`correct_line_numbers`] rewrites.
///
/// An error without a location of its own (no root element) is placed at
/// the end of the input.
fn syntax_message(err: &roxmltree::Error, content: &str) -> String {
    let pos = if matches!(err, roxmltree::Error::NoRootNode) {
        end_of_input(content)
    } else {
        err.pos()
    };
    let text = err.to_string();
    let suffix = format!(" at {}", err.pos());
    let description = text.strip_suffix(suffix.as_str()).unwrap_or(&text);

    // Some descriptions name the position mid-sentence as `at R:C`.
    let pos_re = Regex::new(r"at ([0-9]+):([0-9]+)").expect("valid regex");
    if pos_re.is_match(description) {
        return pos_re
            .replace_all(description, "at line ${1}, column ${2}")
            .into_owned();
    }
    format!("{}, line {}, column {}", description, pos.row, pos.col)
}

fn end_of_input(content: &str) -> TextPos {
    let row = content.matches('\n').count() + 1;
    let col = content.rsplit('\n').next().map_or(0, |last| last.chars().count()) + 1;
    TextPos::new(row as u32, col as u32)
}

/// Shift every `line N` in a parser message back by the injected lines.
/// A position inside the injected doctype is reported as line 1.
fn correct_line_numbers(message: &str, line_offset: usize) -> String {
    let line_re = Regex::new(r"line ([0-9]+)").expect("valid regex");
    line_re
        .replace_all(message, |caps: &Captures| match caps[1].parse::<i64>() {
            Ok(line) => format!("line {}", (line - line_offset as i64).max(1)),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}
