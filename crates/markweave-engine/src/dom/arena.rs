/// Index of a node in the [`Dom`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single HTML attribute. Order of attributes follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Tag, attributes and void flag of an element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub attrs: Vec<Attribute>,
    /// Void elements render as a bare opening tag with no children.
    pub void: bool,
}

/// What a node is: an element or a raw text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element(ElementData),
    /// Raw text payload, rendered verbatim with no wrapping tag.
    Text(String),
}

/// One node in the arena: kind plus structural links.
#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

/// Arena-backed element tree.
///
/// The root is created at construction and never replaced. All mutation is
/// additive: nodes are created detached and attached once with
/// [`Dom::append_child`].
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Dom {
    /// Tag of the invisible pass-through root used in fragment mode.
    /// The renderer emits only its children, never the tag itself.
    pub const FRAGMENT_TAG: &'static str = "fragment";

    /// Creates a tree with a single element root with the given tag.
    pub fn with_root(tag: &str) -> Self {
        let root_node = Node {
            parent: None,
            kind: NodeKind::Element(ElementData {
                tag: tag.to_string(),
                attrs: Vec::new(),
                void: false,
            }),
            children: Vec::new(),
        };
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    /// Creates a tree rooted at a pass-through fragment container.
    pub fn fragment() -> Self {
        Self::with_root(Self::FRAGMENT_TAG)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Creates a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData {
            tag: tag.to_string(),
            attrs: Vec::new(),
            void: false,
        }))
    }

    /// Creates a detached text leaf.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            kind,
            children: Vec::new(),
        });
        id
    }

    /// Attaches `child` as the last child of `parent` and returns the child
    /// id, usable as a new insertion point.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        child
    }

    /// Upserts an attribute on an element node. Later writes with the same
    /// name overwrite the value. No-op on text leaves.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element(data) = &mut self.node_mut(id).kind {
            if let Some(attr) = data.attrs.iter_mut().find(|a| a.name == name) {
                attr.value = value.to_string();
            } else {
                data.attrs.push(Attribute {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    /// Flags an element as void (no closing tag, children not rendered).
    pub fn mark_void(&mut self, id: NodeId) {
        if let NodeKind::Element(data) = &mut self.node_mut(id).kind {
            data.void = true;
        }
    }

    /// Non-owning upward lookup. Returns `None` at the root.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        let dom = Dom::with_root("html");
        assert_eq!(dom.parent_of(dom.root()), None);
    }

    #[test]
    fn append_child_links_both_directions() {
        let mut dom = Dom::fragment();
        let p = dom.create_element("p");
        let attached = dom.append_child(dom.root(), p);

        assert_eq!(attached, p);
        assert_eq!(dom.parent_of(p), Some(dom.root()));
        assert_eq!(dom.node(dom.root()).children, vec![p]);
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut dom = Dom::fragment();
        let a = dom.create_element("h1");
        let b = dom.create_element("p");
        dom.append_child(dom.root(), a);
        dom.append_child(dom.root(), b);
        assert_eq!(dom.node(dom.root()).children, vec![a, b]);
    }

    #[test]
    fn set_attribute_last_write_wins() {
        let mut dom = Dom::fragment();
        let img = dom.create_element("img");
        dom.set_attribute(img, "src", "a.png");
        dom.set_attribute(img, "alt", "first");
        dom.set_attribute(img, "src", "b.png");

        match &dom.node(img).kind {
            NodeKind::Element(data) => {
                assert_eq!(data.attrs.len(), 2);
                assert_eq!(data.attrs[0].name, "src");
                assert_eq!(data.attrs[0].value, "b.png");
            }
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn mark_void_sets_flag() {
        let mut dom = Dom::fragment();
        let br = dom.create_element("br");
        dom.mark_void(br);
        match &dom.node(br).kind {
            NodeKind::Element(data) => assert!(data.void),
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn text_leaf_ignores_attributes() {
        let mut dom = Dom::fragment();
        let t = dom.create_text("hello");
        dom.set_attribute(t, "class", "x");
        assert!(matches!(&dom.node(t).kind, NodeKind::Text(s) if s == "hello"));
    }
}
