//! Field selection and per-node value extraction.
//!
//! A result expression yields one column per enabled field for every
//! candidate record. With no field toggles set it yields a single column
//! holding the XPath string value of its matches.

use amxml::dom::NodePtr;
use serde::Serialize;

/// Which fields of a matched element are reported.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct FieldSelection {
    /// Report the element tag name.
    pub tag: bool,
    /// Report the element attributes as key=value pairs.
    pub attrib: bool,
    /// Report the element text content.
    pub text: bool,
    /// Report the text immediately following the element.
    pub tail: bool,
}

impl FieldSelection {
    /// True when at least one field toggle is enabled.
    #[must_use]
    pub fn any(self) -> bool {
        self.tag || self.attrib || self.text || self.tail
    }

    /// Labels of the enabled fields, in the fixed report order.
    /// With no toggles enabled this is the single implicit value column.
    #[must_use]
    pub fn labels(self) -> Vec<&'static str> {
        if !self.any() {
            return vec!["value"];
        }
        let mut labels = Vec::new();
        if self.tag {
            labels.push("tag");
        }
        if self.attrib {
            labels.push("attrib");
        }
        if self.text {
            labels.push("text");
        }
        if self.tail {
            labels.push("tail");
        }
        labels
    }

    /// Number of columns each result expression expands into.
    #[must_use]
    pub fn column_count(self) -> usize {
        self.labels().len()
    }

    /// Extracts the enabled fields from one matched node, in label order.
    #[must_use]
    pub fn extract(self, node: &NodePtr) -> Vec<String> {
        if !self.any() {
            return vec![string_value(node)];
        }
        let mut cells = Vec::new();
        if self.tag {
            cells.push(node.name());
        }
        if self.attrib {
            cells.push(attrib_pairs(node));
        }
        if self.text {
            cells.push(own_text(node));
        }
        if self.tail {
            cells.push(tail_text(node));
        }
        cells
    }
}

/// XPath string value of a node: the concatenated text content for
/// elements, the literal value for text and attribute nodes.
#[must_use]
pub fn string_value(node: &NodePtr) -> String {
    let texts = node
        .get_nodeset("descendant-or-self::text()")
        .unwrap_or_default();
    if texts.is_empty() {
        // Attribute, comment and processing-instruction nodes have no
        // text descendants; their own value is the string value.
        node.value()
    } else {
        texts.iter().map(NodePtr::value).collect()
    }
}

/// Concatenated direct text children of an element.
fn own_text(node: &NodePtr) -> String {
    node.get_nodeset("text()")
        .unwrap_or_default()
        .iter()
        .map(NodePtr::value)
        .collect()
}

/// The text node immediately following the element, if any.
fn tail_text(node: &NodePtr) -> String {
    node.get_nodeset("following-sibling::node()[1][self::text()]")
        .unwrap_or_default()
        .first()
        .map(NodePtr::value)
        .unwrap_or_default()
}

/// Attributes of an element rendered as space-separated key=value pairs,
/// in document order.
fn attrib_pairs(node: &NodePtr) -> String {
    node.get_nodeset("@*")
        .unwrap_or_default()
        .iter()
        .map(|attr| format!("{}={}", attr.name(), attr.value()))
        .collect::<Vec<_>>()
        .join(" ")
}
