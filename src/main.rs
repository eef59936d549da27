use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod playback;
mod utils;

use components::AppView;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

// The adaptive player widget is an external script; the bootstrap polls for
// its global until both the script and the video element exist.
const SHAKA_PLAYER_SRC: &str =
    "https://cdn.jsdelivr.net/npm/shaka-player@4.11.7/dist/shaka-player.compiled.js";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Meta { name: "theme-color", content: "#18181b" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }
        document::Script { src: SHAKA_PLAYER_SRC }

        Router::<AppView> {}
    }
}
