// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link checks
//!
//! - `<a>` must have an `href`; without one it is only a placeholder and
//!   screen readers skip it
//! - `href="#"` is a button in disguise unless marked `role="button"` or
//!   bound to a `preventDefault` handler
//! - `<a>` must have something to announce: text, an image, TAL-provided
//!   content or an `aria-label`

use crate::attributes::resolve;
use crate::checks::{has_descendant, has_dynamic_content, has_text, html_elements, Check};
use crate::context::Reporter;
use roxmltree::Node;

pub const MISSING_LINK_TARGET: &str = "missing-link-target";
pub const PLACEHOLDER_LINK_TARGET: &str = "placeholder-link-target";
pub const MISSING_LINK_CONTENT: &str = "missing-link-content";

const MISSING_HREF_MESSAGE: &str = "The <a> element is missing the href attribute. \
Without the href attribute an anchor represents a placeholder for where a link might \
otherwise have been placed and is invisible for screen readers. If the <a> is used to \
create interactive clickable elements, consider using the <button type=“button”> \
element instead for this.";

const PLACEHOLDER_HREF_MESSAGE: &str = "The <a> element href attribute should not be a \
single \"#\", it can cause the page to scroll back to the top and it adds an entry to \
the browser history, so it takes an additiona  click of the back button to go to the \
previous page. Consider using a <button type=“button”> element to create interactive \
clickable elements.";

const MISSING_CONTENT_MESSAGE: &str = "The <a> element requires descriptive content that \
help users better understand what they can expect if they click the link. An <a> element \
without descriptive text will only announce the href path to screen reader users. Keep in \
mind that users of screen readers have trouble distinguishing icons and need descriptive \
text to understand the context of the <button>. Consider adding descriptive content in the \
form of text, an aria-label attribute or an image.";

/// Link target check, covers both missing and placeholder targets
pub struct LinkTargetCheck;

impl Check for LinkTargetCheck {
    fn name(&self) -> &str {
        "link-target"
    }

    fn description(&self) -> &str {
        "Checks that <a> elements link somewhere"
    }

    fn check(&self, root: Node<'_, '_>, reporter: &mut Reporter<'_>) {
        for link in html_elements(root, "a") {
            match resolve(link, "href") {
                None => reporter.report(link, MISSING_LINK_TARGET, MISSING_HREF_MESSAGE),
                Some(href) if href.trim() == "#" => {
                    if is_scripted_button(link) {
                        continue;
                    }
                    reporter.report(link, PLACEHOLDER_LINK_TARGET, PLACEHOLDER_HREF_MESSAGE);
                }
                Some(_) => {}
            }
        }
    }
}

/// `href="#"` is acceptable for links acting as script-driven buttons
fn is_scripted_button(link: Node<'_, '_>) -> bool {
    resolve(link, "role") == Some("button")
        || resolve(link, "preventDefault").is_some_and(|v| !v.is_empty())
}

/// Link content check
pub struct LinkContentCheck;

impl Check for LinkContentCheck {
    fn name(&self) -> &str {
        "link-content"
    }

    fn description(&self) -> &str {
        "Checks that <a> elements have content a screen reader can announce"
    }

    fn check(&self, root: Node<'_, '_>, reporter: &mut Reporter<'_>) {
        for link in html_elements(root, "a") {
            if has_text(link)
                || has_descendant(link, &["img"])
                || has_dynamic_content(link)
                || resolve(link, "aria-label").is_some_and(|v| !v.is_empty())
            {
                continue;
            }
            reporter.report(link, MISSING_LINK_CONTENT, MISSING_CONTENT_MESSAGE);
        }
    }
}
