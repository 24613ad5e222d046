// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image description check
//!
//! Every `<img>` needs an `alt` attribute. An empty `alt=""` is fine: it
//! marks the image as decorative so screen readers skip it.

use crate::attributes::resolve;
use crate::checks::{html_elements, Check};
use crate::context::Reporter;
use roxmltree::Node;

pub const MISSING_IMAGE_DESCRIPTION: &str = "missing-image-description";

const MISSING_ALT_MESSAGE: &str = "The <img> element requires an alt attribute. The alt \
attribute provides descriptive information for an image if a user for some reason cannot \
view it (because of slow connection, an error, or if the user uses a screen reader). If \
the image is considered decorative, the alt attribute should be left empty, but not \
removed, so screen readers will ignore the image.";

pub struct ImageDescriptionCheck;

impl Check for ImageDescriptionCheck {
    fn name(&self) -> &str {
        "image-description"
    }

    fn description(&self) -> &str {
        "Checks that <img> elements carry an alt attribute"
    }

    fn check(&self, root: Node<'_, '_>, reporter: &mut Reporter<'_>) {
        for image in html_elements(root, "img") {
            if resolve(image, "alt").is_none() {
                reporter.report(image, MISSING_IMAGE_DESCRIPTION, MISSING_ALT_MESSAGE);
            }
        }
    }
}
