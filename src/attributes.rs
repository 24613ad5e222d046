// SPDX-License-Identifier: PMPL-1.0-or-later
//! Effective attribute lookup for template elements.
//!
//! A template can set an attribute in three ways: literally, through a
//! `tal:attributes` directive evaluated at render time, or through the
//! AngularJS-style `x-ng-attr-*` / `x-ng-*` bindings evaluated in the
//! browser. The checks only care whether a value will be there, so they
//! all go through [`resolve`].

use roxmltree::Node;

/// Namespace of the XHTML elements in a template
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Namespace of the TAL directives
pub const TAL_NS: &str = "http://xml.zope.org/namespaces/tal";

/// Return the effective value of attribute `name` on `node`.
///
/// Lookup order, first match wins:
/// 1. the plain attribute `name`
/// 2. an entry `name <expr>` in `tal:attributes`
/// 3. `x-ng-attr-<name>`
/// 4. `x-ng-<name>`
///
/// For `tal:attributes` the returned value is the unevaluated expression,
/// e.g. `'link.html'` for `tal:attributes="href 'link.html'"`.
pub fn resolve<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    if let Some(value) = node.attribute(name) {
        return Some(value);
    }

    if let Some(directive) = node.attribute((TAL_NS, "attributes")) {
        // Cheap rejection first; the exact key match below decides.
        if directive.contains(name) {
            return tal_attribute(directive, name);
        }
    }

    if let Some(value) = node.attribute(format!("x-ng-attr-{}", name).as_str()) {
        return Some(value);
    }

    node.attribute(format!("x-ng-{}", name).as_str())
}

/// Find `name` in a `tal:attributes` value (`name expr; name expr; ...`).
fn tal_attribute<'a>(directive: &'a str, name: &str) -> Option<&'a str> {
    directive
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once(char::is_whitespace) {
            Some((key, value)) => (key, value.trim()),
            None => (pair, ""),
        })
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    /// Parse `body` inside a namespaced template and resolve `name` on its
    /// first `<div>`.
    fn resolve_on_div(body: &str, name: &str) -> Option<String> {
        let xml = format!(
            r#"<html xmlns="{}" xmlns:tal="{}"><body>{}</body></html>"#,
            XHTML_NS, TAL_NS, body
        );
        let doc = Document::parse(&xml).expect("valid test document");
        let div = doc
            .descendants()
            .find(|n| n.has_tag_name((XHTML_NS, "div")))
            .expect("test document has a div");
        resolve(div, name).map(String::from)
    }

    #[test]
    fn test_plain_attribute() {
        assert_eq!(
            resolve_on_div(r#"<div class="foo">body</div>"#, "class"),
            Some("foo".to_string())
        );
    }

    #[test]
    fn test_missing_attribute() {
        assert_eq!(resolve_on_div("<div>body</div>", "class"), None);
    }

    #[test]
    fn test_plain_attribute_wins_over_bindings() {
        let body = r#"<div class="plain" tal:attributes="class 'tal'"
                           x-ng-attr-class="{{a}}" x-ng-class="{{b}}">body</div>"#;
        assert_eq!(resolve_on_div(body, "class"), Some("plain".to_string()));
    }

    #[test]
    fn test_unnamespaced_attributes_is_not_tal() {
        assert_eq!(
            resolve_on_div(r#"<div attributes="class 'foo'">body</div>"#, "class"),
            None
        );
    }

    #[test]
    fn test_tal_attributes_single() {
        assert_eq!(
            resolve_on_div(r#"<div tal:attributes="class 'foo'">body</div>"#, "class"),
            Some("'foo'".to_string())
        );
    }

    #[test]
    fn test_tal_attributes_multiple_single_line() {
        let body = r#"<div tal:attributes="id 'x'; class 'foo'; title 'y'">body</div>"#;
        assert_eq!(resolve_on_div(body, "class"), Some("'foo'".to_string()));
    }

    #[test]
    fn test_tal_attributes_multiline_with_extra_whitespace() {
        let body = r#"<div tal:attributes="
            id   'some-id';
            class    'foo'  ;
            title 'Some Title'">body</div>"#;
        assert_eq!(resolve_on_div(body, "class"), Some("'foo'".to_string()));
        assert_eq!(resolve_on_div(body, "title"), Some("'Some Title'".to_string()));
    }

    #[test]
    fn test_tal_attributes_name_substring_is_not_a_match() {
        let body = r#"<div tal:attributes="
            id 'some-id';
            classy 'foo';
            title 'Some Title'">body</div>"#;
        assert_eq!(resolve_on_div(body, "class"), None);
    }

    #[test]
    fn test_tal_attributes_name_only_in_value_is_not_a_match() {
        let body = r#"<div tal:attributes="title 'href'">body</div>"#;
        assert_eq!(resolve_on_div(body, "href"), None);
    }

    #[test]
    fn test_tal_attributes_prefilter_hit_stops_lookup() {
        // `href` passes the substring test but is no key, so the x-ng
        // binding is not consulted.
        let body = r#"<div tal:attributes="title 'href'" x-ng-href="e">body</div>"#;
        assert_eq!(resolve_on_div(body, "href"), None);
    }

    #[test]
    fn test_tal_attributes_prefilter_miss_falls_through() {
        let body = r#"<div tal:attributes="title 'Title'" x-ng-href="e">body</div>"#;
        assert_eq!(resolve_on_div(body, "href"), Some("e".to_string()));
    }

    #[test]
    fn test_tal_attributes_trailing_separator() {
        let body = r#"<div tal:attributes="href 'link.html';">body</div>"#;
        assert_eq!(resolve_on_div(body, "href"), Some("'link.html'".to_string()));
    }

    #[test]
    fn test_x_ng_attr_binding() {
        assert_eq!(
            resolve_on_div(r#"<div x-ng-attr-href="e">body</div>"#, "href"),
            Some("e".to_string())
        );
    }

    #[test]
    fn test_x_ng_binding() {
        assert_eq!(
            resolve_on_div(r#"<div x-ng-class="{{foo}}">body</div>"#, "class"),
            Some("{{foo}}".to_string())
        );
    }

    #[test]
    fn test_x_ng_attr_wins_over_x_ng() {
        let body = r#"<div x-ng-attr-href="first" x-ng-href="second">body</div>"#;
        assert_eq!(resolve_on_div(body, "href"), Some("first".to_string()));
    }

    #[test]
    fn test_x_ng_binding_for_other_name() {
        assert_eq!(
            resolve_on_div(r#"<div x-ng-class="{{foo}}">body</div>"#, "href"),
            None
        );
    }
}
