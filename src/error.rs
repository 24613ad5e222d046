// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for check-chameleon

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a lint run.
///
/// Malformed templates are not errors: they become diagnostics.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, LintError>;
