//! Declarative description of a UI subtree.
//!
//! A `Node` is plain data. Components build one from their state, the host
//! turns it into a Dioxus `Element`, and tests inspect it directly.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Div,
    P,
    Span,
    Input,
    Hr,
    Img,
    Button,
    Ul,
    Li,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode<A> {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node<A>>,
    pub on_click: Option<A>,
}

/// `A` is the action a click on the node sends back to its component.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<A> {
    Element(ElementNode<A>),
    Text(String),
}

impl<A> Node<A> {
    pub fn element(tag: Tag) -> Self {
        Node::Element(ElementNode {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        if let Node::Element(el) = &mut self {
            el.id = Some(id.into());
        }
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        if let Node::Element(el) = &mut self {
            el.classes.push(class.into());
        }
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element(el) = &mut self {
            el.attrs.push((name, value.into()));
        }
        self
    }

    pub fn child(mut self, child: Node<A>) -> Self {
        if let Node::Element(el) = &mut self {
            el.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node<A>>) -> Self {
        if let Node::Element(el) = &mut self {
            el.children.extend(children);
        }
        self
    }

    pub fn on_click(mut self, action: A) -> Self {
        if let Node::Element(el) = &mut self {
            el.on_click = Some(action);
        }
        self
    }

    pub fn class_name(&self) -> String {
        match self {
            Node::Element(el) => el.classes.join(" "),
            Node::Text(_) => String::new(),
        }
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(el) => el
                .attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.as_str()),
            Node::Text(_) => None,
        }
    }

    /// All text content in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Text(text) => out.push(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_texts(out);
                }
            }
        }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Node<A>> {
        let Node::Element(el) = self else {
            return None;
        };
        if el.classes.iter().any(|c| c == class) {
            return Some(self);
        }
        el.children.iter().find_map(|c| c.find_by_class(class))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node<A>> {
        let Node::Element(el) = self else {
            return None;
        };
        if el.id.as_deref() == Some(id) {
            return Some(self);
        }
        el.children.iter().find_map(|c| c.find_by_id(id))
    }

    pub fn click_action(&self) -> Option<&A> {
        match self {
            Node::Element(el) => el.on_click.as_ref(),
            Node::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_ignore_text_nodes() {
        let node: Node<()> = Node::text("hi").class("x").attr("alt", "y").on_click(());
        assert_eq!(node, Node::text("hi"));
    }

    #[test]
    fn texts_are_collected_in_document_order() {
        let tree: Node<()> = Node::element(Tag::Div)
            .child(Node::element(Tag::P).child(Node::text("first")))
            .child(Node::text("second"))
            .child(Node::element(Tag::Ul).child(Node::element(Tag::Li).child(Node::text("third"))));

        assert_eq!(tree.texts(), vec!["first", "second", "third"]);
        assert!(tree.contains_text("third"));
        assert!(!tree.contains_text("fourth"));
    }

    #[test]
    fn find_by_class_and_id_search_depth_first() {
        let tree: Node<u8> = Node::element(Tag::Div).child(
            Node::element(Tag::Span)
                .class("a")
                .class("b")
                .id("target")
                .on_click(7),
        );

        let hit = tree.find_by_class("b").expect("class b");
        assert_eq!(hit.class_name(), "a b");
        assert_eq!(hit.click_action(), Some(&7));
        assert!(tree.find_by_id("target").is_some());
        assert!(tree.find_by_class("missing").is_none());
    }
}
