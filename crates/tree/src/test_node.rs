//! Minimal node double for exercising the builder core without a markup
//! crate: enough structure to observe attachment order, attributes, and
//! class union through a compact rendering.

use crate::node::BuilderNode;
use crate::session::{Session, TreeConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TestNode {
    Element {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<TestNode>,
    },
    Text(String),
}

impl TestNode {
    pub(crate) fn element(name: &str) -> Self {
        TestNode::Element {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn render(&self) -> String {
        match self {
            TestNode::Text(text) => text.clone(),
            TestNode::Element {
                name,
                attributes,
                children,
            } => {
                let mut out = format!("<{name}");
                for (attr_name, value) in attributes {
                    out.push(' ');
                    out.push_str(attr_name);
                    if let Some(value) = value {
                        out.push_str("='");
                        out.push_str(value);
                        out.push('\'');
                    }
                }
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for child in children {
                        out.push_str(&child.render());
                    }
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
                out
            }
        }
    }
}

impl BuilderNode for TestNode {
    fn append_child(&mut self, child: Self) {
        let TestNode::Element { children, .. } = self else {
            unreachable!("text node cannot take children");
        };
        children.push(child);
    }

    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        let TestNode::Element { attributes, .. } = self else {
            unreachable!("text node cannot take attributes");
        };
        attributes.push((name.to_string(), value.map(str::to_string)));
    }

    fn append_text(&mut self, text: &str) {
        self.append_child(TestNode::Text(text.to_string()));
    }

    fn add_class(&mut self, name: &str) {
        let TestNode::Element { attributes, .. } = self else {
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

pub(crate) fn create(name: &str, _id: Option<&str>, _config: &TreeConfig) -> TestNode {
    TestNode::element(name)
}

pub(crate) fn session() -> Session<TestNode> {
    Session::new(create)
}

pub(crate) fn render_all(nodes: &[TestNode]) -> String {
    nodes.iter().map(TestNode::render).collect()
}
