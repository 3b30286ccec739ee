use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{LinkShare, UserCard};
use crate::config::PageConfig;
use crate::styles;

#[component]
pub fn SharePage() -> Element {
    let config = use_hook(PageConfig::bundled);
    let link = use_hook(|| config.share_link());
    let mut is_public = use_signal(|| config.is_public);
    let css = use_hook(styles::stylesheet);

    rsx! {
        document::Style { {css} }
        UserCard { name: config.user_name.clone() }
        LinkShare {
            link,
            is_public: is_public(),
            on_stop_sharing: move |_| {
                info!("sharing stopped");
                is_public.set(false);
            },
        }
    }
}
