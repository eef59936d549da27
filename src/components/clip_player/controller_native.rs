use dioxus::prelude::*;

/// Adaptive playback rides on the browser media stack; desktop builds show a
/// placeholder instead of a player.
#[component]
pub fn ClipPlayer(clip_id: ReadOnlySignal<String>) -> Element {
    let _ = clip_id;

    rsx! {
        div { class: "clip-player flex items-center justify-center aspect-video rounded-2xl bg-zinc-900 border border-zinc-800",
            p { class: "text-sm text-zinc-400", "Clip playback is available in the web app." }
        }
    }
}
