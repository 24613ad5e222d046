// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button content check
//!
//! A `<button>` needs text, TAL-provided content or an `aria-label`.
//! Unlike links, an image alone does not count.

use crate::attributes::resolve;
use crate::checks::{has_dynamic_content, has_text, html_elements, Check};
use crate::context::Reporter;
use roxmltree::Node;

pub const MISSING_BUTTON_CONTENT: &str = "missing-button-content";

const MISSING_CONTENT_MESSAGE: &str = "The <button> element requires descriptive text that \
helps users understand what they can expect when they click it. Keep in mind that users of \
screen readers have trouble distinguishing icons and need descriptive text to understand \
the context of the <button>. Consider adding descriptive text in the form of text or an \
aria-label attribute.";

pub struct ButtonContentCheck;

impl Check for ButtonContentCheck {
    fn name(&self) -> &str {
        "button-content"
    }

    fn description(&self) -> &str {
        "Checks that <button> elements have text a screen reader can announce"
    }

    fn check(&self, root: Node<'_, '_>, reporter: &mut Reporter<'_>) {
        for button in html_elements(root, "button") {
            if has_text(button)
                || has_dynamic_content(button)
                || resolve(button, "aria-label").is_some_and(|v| !v.is_empty())
            {
                continue;
            }
            reporter.report(button, MISSING_BUTTON_CONTENT, MISSING_CONTENT_MESSAGE);
        }
    }
}
