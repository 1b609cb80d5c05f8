use tree::BuilderNode;

/// One node of a markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        name: String,
        /// Insertion-ordered; `None` marks a presence-only attribute.
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
}

impl Node {
    pub fn element(name: impl Into<String>) -> Self {
        Node::Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            Node::Text { .. } => None,
        }
    }

    /// First attribute entry named `name`: `Some(None)` for presence-only.
    pub fn attribute(&self, name: &str) -> Option<Option<&str>> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_deref()),
            Node::Text { .. } => None,
        }
    }

    /// Append an attribute entry. Entries are kept in call order and never
    /// deduplicated; lookup finds the first.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: Option<String>) {
        let Node::Element { attributes, .. } = self else {
            unreachable!("text node cannot take attributes");
        };
        attributes.push((name.into(), value));
    }

    pub fn append(&mut self, child: Node) {
        let Node::Element { children, .. } = self else {
            unreachable!("text node cannot take children");
        };
        children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Union `name` into the node's class set: whitespace-token semantics on
    /// the first `class` entry, idempotent.
    pub fn add_class(&mut self, name: &str) {
        let Node::Element { attributes, .. } = self else {
            unreachable!("text node cannot take attributes");
        };
        match attributes.iter_mut().find(|(key, _)| key == "class") {
            Some((_, value)) => {
                let current = value.get_or_insert_with(String::new);
                if !current.split_ascii_whitespace().any(|token| token == name) {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(name);
                }
            }
            None => attributes.push(("class".to_string(), Some(name.to_string()))),
        }
    }
}

impl BuilderNode for Node {
    fn append_child(&mut self, child: Self) {
        self.append(child);
    }

    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        self.push_attribute(name, value.map(str::to_string));
    }

    fn append_text(&mut self, text: &str) {
        self.append(Node::text(text));
    }

    fn add_class(&mut self, name: &str) {
        Node::add_class(self, name);
    }
}

/// Ordered sequence of top-level siblings produced by one builder session.
///
/// Grows only by append during the session that owns it; read-only by
/// convention afterward.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment(pub Vec<Node>);

impl From<Vec<Node>> for Fragment {
    fn from(nodes: Vec<Node>) -> Self {
        Fragment(nodes)
    }
}

impl IntoIterator for Fragment {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
