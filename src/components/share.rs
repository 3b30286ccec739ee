//! Share widget: the share link plus a dropdown of places to send it.

use dioxus::prelude::*;

use super::component::ReducerComponent;
use super::host::{render_node, use_instance};
use super::view::{Node, Tag};
use crate::styles;

pub const SHARE_TITLE: &str = "Share the following link to invite people to your music";
pub const SHARE_TARGETS: [&str; 3] = ["Facebook", "Twitter", "Copy URL"];
pub const PUBLIC_NOTICE: &str = "Your music is public.";
pub const STOP_SHARING: &str = "Stop sharing";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareState {
    pub is_dropdown_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareAction {
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareWidget {
    pub link: String,
}

impl ShareWidget {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }

    fn dropdown(&self, state: &ShareState) -> Node<ShareAction> {
        let toggle = Node::element(Tag::Button)
            .class("dropdown-toggle")
            .class(styles::SHARE_BTN.class())
            .attr("aria-expanded", state.is_dropdown_open.to_string())
            .on_click(ShareAction::Toggle)
            .child(Node::text("Share"));

        let mut dropdown = Node::element(Tag::Div)
            .class(styles::DROPDOWN.class())
            .child(toggle);

        if state.is_dropdown_open {
            // Picking a target closes the menu, same as clicking the toggle.
            let items = SHARE_TARGETS.iter().map(|label| {
                Node::element(Tag::Li)
                    .class(styles::DROPDOWN_ITEM.class())
                    .on_click(ShareAction::Toggle)
                    .child(Node::text(*label))
            });
            dropdown = dropdown.child(
                Node::element(Tag::Ul)
                    .class(styles::DROPDOWN_MENU.class())
                    .children(items),
            );
        }
        dropdown
    }
}

impl ReducerComponent for ShareWidget {
    type State = ShareState;
    type Action = ShareAction;

    fn name(&self) -> &'static str {
        "ShareWidget"
    }

    fn initial_state(&self) -> ShareState {
        ShareState::default()
    }

    fn reduce(&self, action: ShareAction, state: ShareState) -> ShareState {
        match action {
            ShareAction::Toggle => ShareState {
                is_dropdown_open: !state.is_dropdown_open,
            },
        }
    }

    fn render(&self, state: &ShareState) -> Node<ShareAction> {
        let url_row = Node::element(Tag::Div)
            .class(styles::FLEX_CENTER_END.class())
            .class(styles::SHARE_WRAPPER.class())
            .child(
                Node::element(Tag::Input)
                    .class(styles::SHARE_LINK_URL.class())
                    .attr("readonly", "true")
                    .attr("value", self.link.clone()),
            )
            .child(Node::element(Tag::Hr).class(styles::INPUT_LINE.class()))
            .child(self.dropdown(state));

        Node::element(Tag::Div)
            .class(styles::LINK_SHARING.class())
            .child(
                Node::element(Tag::P)
                    .class(styles::SHARE_LINK_TITLE.class())
                    .child(Node::text(SHARE_TITLE)),
            )
            .child(url_row)
    }
}

/// The "public" notice under the widget. Clicking `#stop-btn` emits `()`,
/// which `LinkShare` hands to its parent.
pub fn sub_info() -> Node<()> {
    Node::element(Tag::P)
        .class(styles::SUB_INFO.class())
        .child(Node::text(PUBLIC_NOTICE))
        .child(
            Node::element(Tag::Span)
                .id("stop-btn")
                .on_click(())
                .child(Node::text(STOP_SHARING)),
        )
}

/// Mounted share widget. `is_public` and the stop control belong to the
/// parent; the widget only owns its dropdown flag. `link` is read at mount.
#[component]
pub fn LinkShare(link: String, is_public: bool, on_stop_sharing: EventHandler<()>) -> Element {
    let (instance, send) = use_instance(ShareWidget::new(link));
    let tree = instance.read().render();

    rsx! {
        {render_node(&tree, Some(send))}
        if is_public {
            {render_node(&sub_info(), Some(on_stop_sharing))}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::component::Instance;
    use proptest::prelude::*;

    fn widget() -> ShareWidget {
        ShareWidget::new("www.example.com/?userId")
    }

    fn has_any_target(tree: &Node<ShareAction>) -> bool {
        SHARE_TARGETS.iter().any(|label| tree.contains_text(label))
    }

    #[test]
    fn starts_closed() {
        assert!(!widget().initial_state().is_dropdown_open);
    }

    #[test]
    fn toggle_from_initial_opens_the_menu() {
        let w = widget();
        let state = w.reduce(ShareAction::Toggle, w.initial_state());
        assert_eq!(state, ShareState { is_dropdown_open: true });

        let tree = w.render(&state);
        for label in SHARE_TARGETS {
            assert!(tree.contains_text(label), "missing {label}");
        }
    }

    #[test]
    fn toggle_from_open_hides_every_target() {
        let w = widget();
        let state = w.reduce(ShareAction::Toggle, ShareState { is_dropdown_open: true });
        assert_eq!(state, ShareState { is_dropdown_open: false });
        assert!(!has_any_target(&w.render(&state)));
    }

    #[test]
    fn two_toggles_return_to_initial() {
        let mut instance = Instance::mount(widget());
        let initial = *instance.state();
        instance.send(ShareAction::Toggle);
        instance.send(ShareAction::Toggle);
        assert_eq!(*instance.state(), initial);
    }

    #[test]
    fn closed_view_keeps_the_toggle_and_link() {
        let w = widget();
        let tree = w.render(&ShareState::default());

        let toggle = tree.find_by_class("dropdown-toggle").expect("toggle button");
        assert_eq!(toggle.click_action(), Some(&ShareAction::Toggle));
        assert!(tree.contains_text("Share"));
        assert!(tree.contains_text(SHARE_TITLE));

        let input = tree.find_by_class("shareLinkURL").expect("link input");
        assert_eq!(input.attr_value("value"), Some("www.example.com/?userId"));
        assert_eq!(input.attr_value("readonly"), Some("true"));
        assert!(tree.find_by_class("dropdown-menu").is_none());
    }

    #[test]
    fn menu_items_close_the_menu() {
        let w = widget();
        let tree = w.render(&ShareState { is_dropdown_open: true });
        let item = tree.find_by_class("dropdown-item").expect("menu item");
        let action = *item.click_action().expect("item action");

        let next = w.reduce(action, ShareState { is_dropdown_open: true });
        assert!(!next.is_dropdown_open);
    }

    #[test]
    fn sub_info_carries_the_stop_control() {
        let tree = sub_info();
        assert_eq!(tree.class_name(), "subInfo");
        assert!(tree.contains_text(PUBLIC_NOTICE));

        let stop = tree.find_by_id("stop-btn").expect("stop control");
        assert_eq!(stop.click_action(), Some(&()));
        assert!(stop.contains_text(STOP_SHARING));
    }

    #[component]
    fn MountedShare(is_public: bool) -> Element {
        rsx! {
            LinkShare {
                link: "www.example.com/?userId",
                is_public,
                on_stop_sharing: move |_| {},
            }
        }
    }

    #[component]
    fn OpenShare() -> Element {
        let tree = widget().render(&ShareState { is_dropdown_open: true });
        render_node(&tree, None)
    }

    fn render_html(dom: &mut VirtualDom) -> String {
        dom.rebuild_in_place();
        dioxus_ssr::render(dom)
    }

    #[test]
    fn mounted_widget_renders_closed_with_public_notice() {
        let mut dom = VirtualDom::new_with_props(MountedShare, MountedShareProps { is_public: true });
        let html = render_html(&mut dom);

        assert!(html.contains(SHARE_TITLE));
        assert!(html.contains("www.example.com/?userId"));
        assert!(html.contains("dropdown-toggle"));
        for label in SHARE_TARGETS {
            assert!(!html.contains(label), "{label} shown while closed");
        }
        assert!(html.contains(PUBLIC_NOTICE));
        assert!(html.contains("stop-btn"));
    }

    #[test]
    fn private_page_hides_the_public_notice() {
        let mut dom = VirtualDom::new_with_props(MountedShare, MountedShareProps { is_public: false });
        let html = render_html(&mut dom);

        assert!(html.contains(SHARE_TITLE));
        assert!(!html.contains(PUBLIC_NOTICE));
        assert!(!html.contains(STOP_SHARING));
    }

    #[test]
    fn open_tree_reaches_the_page_with_every_target() {
        let mut dom = VirtualDom::new(OpenShare);
        let html = render_html(&mut dom);

        assert!(html.contains("dropdown-menu"));
        for label in SHARE_TARGETS {
            assert!(html.contains(label), "missing {label}");
        }
    }

    proptest! {
        #[test]
        fn toggle_negates_and_is_an_involution(open in any::<bool>()) {
            let w = widget();
            let s = ShareState { is_dropdown_open: open };
            let once = w.reduce(ShareAction::Toggle, s);
            prop_assert_eq!(once.is_dropdown_open, !open);
            prop_assert_eq!(w.reduce(ShareAction::Toggle, once), s);
        }

        #[test]
        fn render_is_deterministic(open in any::<bool>()) {
            let w = widget();
            let s = ShareState { is_dropdown_open: open };
            prop_assert_eq!(w.render(&s), w.render(&s));
        }
    }
}
