//! Hands component trees to Dioxus and feeds clicks back as actions.

use dioxus::prelude::*;

use super::component::{Instance, ReducerComponent};
use super::view::{ElementNode, Node, Tag};

/// Mounts `component` for the calling Dioxus component.
///
/// The instance lives in a signal, so every `send` re-renders the caller.
pub fn use_instance<C>(component: C) -> (Signal<Instance<C>>, Callback<C::Action>)
where
    C: ReducerComponent + 'static,
    C::State: 'static,
    C::Action: 'static,
{
    let mut instance = use_signal(|| Instance::mount(component));
    let send = use_callback(move |action: C::Action| instance.write().send(action));
    (instance, send)
}

pub fn render_node<A>(node: &Node<A>, send: Option<Callback<A>>) -> Element
where
    A: Clone + 'static,
{
    match node {
        Node::Text(text) => rsx! { "{text}" },
        Node::Element(el) => render_element(node, el, send),
    }
}

fn render_element<A>(node: &Node<A>, el: &ElementNode<A>, send: Option<Callback<A>>) -> Element
where
    A: Clone + 'static,
{
    let class = node.class_name();
    let id = el.id.clone();
    let action = el.on_click.clone();
    let onclick = move |_: MouseEvent| {
        if let (Some(send), Some(action)) = (send, action.clone()) {
            send.call(action);
        }
    };
    let children = el.children.iter().map(|child| render_node(child, send));

    match el.tag {
        Tag::Div => rsx! {
            div { class, id, onclick, {children} }
        },
        Tag::P => rsx! {
            p { class, id, onclick, {children} }
        },
        Tag::Span => rsx! {
            span { class, id, onclick, {children} }
        },
        Tag::Ul => rsx! {
            ul { class, id, onclick, {children} }
        },
        Tag::Li => rsx! {
            li { class, id, onclick, {children} }
        },
        Tag::Button => {
            let expanded = node.attr_value("aria-expanded").map(str::to_string);
            rsx! {
                button {
                    class,
                    id,
                    r#type: "button",
                    aria_expanded: expanded,
                    onclick,
                    {children}
                }
            }
        }
        Tag::Input => {
            let value = node.attr_value("value").unwrap_or_default().to_string();
            let readonly = node.attr_value("readonly") == Some("true");
            rsx! {
                input { class, id, readonly, value, onclick }
            }
        }
        Tag::Hr => rsx! {
            hr { class, id }
        },
        Tag::Img => {
            let src = node.attr_value("src").unwrap_or_default().to_string();
            let alt = node.attr_value("alt").unwrap_or_default().to_string();
            rsx! {
                img { class, id, src, alt, onclick }
            }
        }
    }
}
