// SPDX-License-Identifier: PMPL-1.0-or-later
//! Structural accessibility checks.
//!
//! Each check scans the parsed template for one pattern that leaves
//! screen reader users without information, and reports every offending
//! element. Checks share no state; the order of [`default_checks`] is the
//! order diagnostics appear in for a file.

pub mod buttons;
pub mod images;
pub mod labels;
pub mod links;

use crate::attributes::{TAL_NS, XHTML_NS};
use crate::context::Reporter;
use roxmltree::Node;

/// Trait implemented by all checks
pub trait Check: Send + Sync {
    /// Short identifier of this check
    fn name(&self) -> &str;

    /// What this check looks for
    fn description(&self) -> &str;

    /// Scan the tree below `root` and report violations
    fn check(&self, root: Node<'_, '_>, reporter: &mut Reporter<'_>);
}

/// The fixed, ordered set of checks run on every template
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(links::LinkTargetCheck),
        Box::new(images::ImageDescriptionCheck),
        Box::new(links::LinkContentCheck),
        Box::new(buttons::ButtonContentCheck),
        Box::new(labels::LabelAssociationCheck),
    ]
}

/// Whether `node` is the HTML element `name`, in the XHTML namespace or in
/// none (roxmltree reports `xmlns=""` as an empty namespace).
pub(crate) fn is_html_element(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), None | Some("") | Some(XHTML_NS))
}

/// All `name` elements at or below `root`, in document order
pub(crate) fn html_elements<'a, 'input: 'a>(
    root: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    root.descendants().filter(move |n| is_html_element(*n, name))
}

/// Whether any text node (whitespace included) sits below `node`
pub(crate) fn has_text(node: Node<'_, '_>) -> bool {
    node.descendants().any(|n| n.is_text())
}

/// Whether one of the `names` elements sits below `node`
pub(crate) fn has_descendant(node: Node<'_, '_>, names: &[&str]) -> bool {
    node.descendants()
        .skip(1)
        .any(|n| names.iter().any(|name| is_html_element(n, name)))
}

/// Whether TAL fills in the content at render time: `tal:content` on the
/// element, `tal:content` / `tal:replace` on a descendant, or
/// `<tal:block replace="...">` below it.
pub(crate) fn has_dynamic_content(node: Node<'_, '_>) -> bool {
    if node.attribute((TAL_NS, "content")).is_some() {
        return true;
    }

    node.descendants().skip(1).filter(Node::is_element).any(|n| {
        n.attribute((TAL_NS, "content")).is_some()
            || n.attribute((TAL_NS, "replace")).is_some()
            || (n.has_tag_name((TAL_NS, "block")) && n.attribute("replace").is_some())
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::checks::Check;
    use crate::context::Context;
    use crate::diagnostic::Diagnostic;
    use std::path::Path;

    /// Wrap `body` in a namespaced template (body on line 5) and run a
    /// single check on it
    pub fn run_check(check: impl Check + 'static, body: &str) -> Vec<Diagnostic> {
        let source = format!(
            r#"<html
  xmlns="http://www.w3.org/1999/xhtml"
  xmlns:tal="http://xml.zope.org/namespaces/tal">
  <body>
    {}
  </body>
</html>
"#,
            body
        );
        let checks: Vec<Box<dyn Check>> = vec![Box::new(check)];
        Context::from_source(Path::new("test.pt"), source, None).run(&checks)
    }
}
