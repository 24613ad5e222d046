// SPDX-License-Identifier: PMPL-1.0-or-later
//! Runs the checks over a list of template paths.
//!
//! Files are linted in argument order. Directories are walked for template
//! files, which is convenient outside pre-commit where hooks pass files.

use crate::checks::{default_checks, Check};
use crate::context::Context;
use crate::diagnostic::DiagnosticSet;
use crate::error::{LintError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Template extensions picked up when walking a directory
const TEMPLATE_EXTENSIONS: &[&str] = &["pt", "cpt", "zpt", "html"];

/// Directories to skip while walking
const SKIP_DIRS: &[&str] = &[
    "node_modules", "target", "dist", "build", "_build", "vendor", "coverage",
];

/// Lints template files with a fixed list of checks
pub struct Runner {
    checks: Vec<Box<dyn Check>>,
    exclude: Option<String>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(default_checks())
    }
}

impl Runner {
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks, exclude: None }
    }

    /// Skip the checks (not parsing) for paths starting with `prefix`
    pub fn with_exclude(mut self, prefix: Option<String>) -> Self {
        self.exclude = prefix;
        self
    }

    /// Lint every template named by `paths`.
    ///
    /// Malformed templates become diagnostics; an unreadable file aborts
    /// the run.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> Result<DiagnosticSet> {
        let mut diagnostics = DiagnosticSet::new();
        let mut files_checked = 0;

        for path in paths {
            for file in expand_path(path.as_ref())? {
                diagnostics.extend(self.run_file(&file)?.diagnostics);
                files_checked += 1;
            }
        }

        info!(
            "Checked {} files, found {} issues",
            files_checked,
            diagnostics.len()
        );
        Ok(diagnostics)
    }

    /// Lint a single template file
    pub fn run_file(&self, path: &Path) -> Result<DiagnosticSet> {
        debug!("Checking {}", path.display());
        let context = Context::new(path, self.exclude.as_deref())?;
        let mut diagnostics = DiagnosticSet::new();
        diagnostics.extend(context.run(&self.checks));
        Ok(diagnostics)
    }
}

/// Expand a directory into the template files below it, sorted by name.
/// Any other path is returned as is.
fn expand_path(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(path)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.depth() > 0 && e.file_type().is_dir() {
                return !SKIP_DIRS.contains(&name) && !name.starts_with('.');
            }
            true
        });

    for entry in walker {
        let entry = entry.map_err(|source| LintError::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let ext = entry.path().extension().and_then(|e| e.to_str()).unwrap_or("");
        if TEMPLATE_EXTENSIONS.contains(&ext) {
            files.push(entry.into_path());
        }
    }

    debug!("{}: {} template files", path.display(), files.len());
    Ok(files)
}
