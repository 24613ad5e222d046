// SPDX-License-Identifier: PMPL-1.0-or-later
//! Label association check
//!
//! A `<label>` is tied to its control either by wrapping it or through
//! `for`. Whether a `for` points at an existing id is not verified.

use crate::attributes::resolve;
use crate::checks::{has_descendant, html_elements, Check};
use crate::context::Reporter;
use roxmltree::Node;

pub const MISSING_LABEL_ASSOCIATION: &str = "missing-label-association";

/// Elements a label can wrap
const FORM_CONTROLS: &[&str] = &["input", "select", "textarea"];

const MISSING_FOR_MESSAGE: &str = "The <label> element needs to be explicitly associated \
with a form control through the use of nesting or the for attribute, whose value needs to \
correspond to the value of the id attribute of the associated form control element \
(<input>, <textarea> and <select>).";

pub struct LabelAssociationCheck;

impl Check for LabelAssociationCheck {
    fn name(&self) -> &str {
        "label-association"
    }

    fn description(&self) -> &str {
        "Checks that <label> elements wrap a control or name one with for"
    }

    fn check(&self, root: Node<'_, '_>, reporter: &mut Reporter<'_>) {
        for label in html_elements(root, "label") {
            if has_descendant(label, FORM_CONTROLS) {
                continue;
            }
            if resolve(label, "for").is_none() {
                reporter.report(label, MISSING_LABEL_ASSOCIATION, MISSING_FOR_MESSAGE);
            }
        }
    }
}
