//! Read helpers over parsed `roxmltree` documents.

use roxmltree::Node;

use crate::error::NullError;

use super::name::XmlAttr;

/// Character data directly inside an element.
///
/// Text of nested child elements is skipped.
pub fn element_text(node: Node<'_, '_>) -> Result<String, NullError> {
    if !node.is_element() {
        return Err(NullError::NotAnElement);
    }
    Ok(node
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect())
}

/// First child element called `name`.
pub fn child_element<'a, 'input>(parent: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    parent
        .children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

/// Attribute `name` of `node`, if present.
pub fn attr_of(node: Node<'_, '_>, name: &str) -> Option<XmlAttr> {
    node.attribute(name).map(|value| XmlAttr::new(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn reads_direct_text_and_attributes() {
        let doc = Document::parse(r#"<test id="4"><val>a<skip>b</skip>c &amp; d</val></test>"#)
            .unwrap();
        let root = doc.root_element();
        let val = child_element(root, "val").unwrap();
        assert_eq!(element_text(val).unwrap(), "ac & d");
        assert!(child_element(root, "missing").is_none());
        assert_eq!(attr_of(root, "id"), Some(XmlAttr::new("id", "4")));
        assert_eq!(attr_of(root, "other"), None);
    }

    #[test]
    fn non_element_nodes_are_rejected() {
        let doc = Document::parse("<val>text</val>").unwrap();
        let text = doc.root_element().first_child().unwrap();
        assert_eq!(element_text(text), Err(NullError::NotAnElement));
    }
}
