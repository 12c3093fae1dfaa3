//! # HTML Rendering
//!
//! Recursive serialization of the element tree to HTML text.
//!
//! Containers render as `<tag attr='value' …>` + children + `</tag>` and a
//! newline; void elements emit only the opening tag; text leaves emit their
//! payload verbatim (code-block `&nbsp;` escapes must survive untouched).
//! Attribute values are escaped with `html-escape`. The pass-through
//! fragment root renders as just the concatenation of its children.

use crate::dom::{Dom, NodeId, NodeKind};

/// Serializes the whole tree.
pub fn to_html(dom: &Dom) -> String {
    let mut out = String::new();
    let root = dom.root();
    match &dom.node(root).kind {
        NodeKind::Element(data) if data.tag == Dom::FRAGMENT_TAG => {
            for &child in &dom.node(root).children {
                render_node(dom, child, &mut out);
            }
        }
        _ => render_node(dom, root, &mut out),
    }
    out
}

fn render_node(dom: &Dom, id: NodeId, out: &mut String) {
    let node = dom.node(id);
    match &node.kind {
        NodeKind::Text(text) => out.push_str(text),
        NodeKind::Element(data) => {
            out.push('<');
            out.push_str(&data.tag);
            for attr in &data.attrs {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("='");
                out.push_str(&html_escape::encode_quoted_attribute(&attr.value));
                out.push('\'');
            }
            out.push('>');
            if data.void {
                return;
            }
            for &child in &node.children {
                render_node(dom, child, out);
            }
            out.push_str("</");
            out.push_str(&data.tag);
            out.push_str(">\n");
        }
    }
}
