//! WordprocessingML lookup helpers over `roxmltree` nodes.

use roxmltree::Node;

pub(crate) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Check that a node is the WordprocessingML element `name`.
pub(crate) fn is_wml(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

/// First direct child element named `name`.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_wml(*n, name))
}

/// All direct child elements named `name`.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| is_wml(*n, name))
}

/// A `w:`-qualified attribute.
pub(crate) fn attr<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<&'a str> {
    node.attribute((WML_NS, name))
}

/// `w:val` of the child element `name`.
pub(crate) fn child_val<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<&'a str> {
    child(node, name).and_then(|n| attr(n, "val"))
}

/// Toggle property such as `w:b`: present and not switched off.
pub(crate) fn toggle(props: Node, name: &str) -> bool {
    child(props, name).is_some_and(|n| !is_off(attr(n, "val")))
}

/// Whether a `w:val` switches a property off.
pub(crate) fn is_off(val: Option<&str>) -> bool {
    matches!(val, Some("0" | "false" | "off"))
}

/// Convert twentieths of a point to points.
pub(crate) fn twips_to_pts(twips: f32) -> f32 {
    twips / 20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_props<F: FnOnce(Node)>(props: &str, f: F) {
        let xml = format!(r#"<w:rPr xmlns:w="{}">{}</w:rPr>"#, WML_NS, props);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        f(doc.root_element());
    }

    #[test]
    fn test_toggle_values() {
        with_props("<w:b/>", |n| assert!(toggle(n, "b")));
        with_props(r#"<w:b w:val="1"/>"#, |n| assert!(toggle(n, "b")));
        with_props(r#"<w:b w:val="true"/>"#, |n| assert!(toggle(n, "b")));
        with_props(r#"<w:b w:val="0"/>"#, |n| assert!(!toggle(n, "b")));
        with_props(r#"<w:b w:val="false"/>"#, |n| assert!(!toggle(n, "b")));
        with_props("<w:i/>", |n| assert!(!toggle(n, "b")));
    }

    #[test]
    fn test_child_val() {
        with_props(r#"<w:color w:val="FF0000"/>"#, |n| {
            assert_eq!(child_val(n, "color"), Some("FF0000"));
            assert_eq!(child_val(n, "u"), None);
        });
    }

    #[test]
    fn test_ignores_foreign_namespace() {
        let xml = r#"<root xmlns:w="http://example.com/other"><w:b/></root>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        assert!(child(doc.root_element(), "b").is_none());
    }

    #[test]
    fn test_twips() {
        assert_eq!(twips_to_pts(720.0), 36.0);
    }
}
