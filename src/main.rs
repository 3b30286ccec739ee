use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod components;
mod config;
mod share_link;
mod styles;

use components::SharePage;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Share your music" }
        SharePage {}
    }
}
