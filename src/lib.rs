// SPDX-License-Identifier: PMPL-1.0-or-later
//! check-chameleon - accessibility lint for Chameleon page templates
//!
//! Parses Chameleon / Zope Page Templates as XML and runs a fixed set of
//! structural accessibility checks over the resulting tree. Findings are
//! reported as `<file>:<line> <message>` diagnostics, with line numbers
//! always referring to the file as written.
//!
//! ## Checks
//!
//! - **Link target**: `<a>` without `href`, or with a bare `href="#"`
//! - **Image description**: `<img>` without an `alt` attribute
//! - **Link content**: `<a>` with nothing a screen reader could announce
//! - **Button content**: `<button>` with nothing a screen reader could announce
//! - **Label association**: `<label>` neither wrapping a control nor using `for`
//!
//! Attribute lookups understand `tal:attributes` and the `x-ng-attr-*` /
//! `x-ng-*` binding conventions, see [`attributes::resolve`].

pub mod attributes;
pub mod checks;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod report;
pub mod scanner;

pub use error::{LintError, Result};
