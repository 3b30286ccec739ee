use std::convert::Infallible;

use dioxus::prelude::*;

use super::component::StatelessComponent;
use super::host::render_node;
use super::view::{Node, Tag};

const USER_ICON: Asset = asset!("/assets/img/user.svg");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub icon: String,
    pub name: String,
}

impl StatelessComponent for UserBadge {
    fn render(&self) -> Node<Infallible> {
        Node::element(Tag::Div)
            .child(
                Node::element(Tag::Img)
                    .attr("alt", "user icon")
                    .attr("src", self.icon.clone()),
            )
            .child(Node::element(Tag::P).child(Node::text(self.name.clone())))
    }
}

#[component]
pub fn UserCard(name: String) -> Element {
    let badge = UserBadge {
        icon: USER_ICON.to_string(),
        name,
    };
    render_node(&badge.render(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_shows_icon_and_name() {
        let badge = UserBadge {
            icon: "/img/user.svg".into(),
            name: "userABC".into(),
        };
        let tree = badge.render();

        assert_eq!(tree.texts(), vec!["userABC"]);
        let Node::Element(root) = &tree else {
            panic!("badge root should be an element");
        };
        let img = &root.children[0];
        assert_eq!(img.attr_value("alt"), Some("user icon"));
        assert_eq!(img.attr_value("src"), Some("/img/user.svg"));
        assert_eq!(tree, badge.render());
    }
}
