use dioxus::prelude::*;

use crate::api::get_user_clips;
use crate::components::views::home::ClipCard;

#[component]
pub fn UserClips(id: ReadOnlySignal<String>) -> Element {
    let clips = use_resource(move || async move { get_user_clips(&id()).await });

    rsx! {
        div { class: "space-y-8",
            {
                match clips() {
                    Some(Ok(clips)) => {
                        let title = clips
                            .first()
                            .map(|clip| format!("Clips by {}", clip.creator.username))
                            .unwrap_or_else(|| "Clips".to_string());
                        rsx! {
                            header { class: "page-header",
                                h1 { class: "page-title", "{title}" }
                            }
                            if clips.is_empty() {
                                div { class: "flex flex-col items-center justify-center py-20",
                                    h2 { class: "text-xl font-semibold text-white mb-2", "Nothing here" }
                                    p { class: "text-zinc-400", "This user has not posted any clips" }
                                }
                            } else {
                                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                                    for clip in clips {
                                        ClipCard { clip }
                                    }
                                }
                            }
                        }
                    }
                    Some(Err(err)) => rsx! {
                        div { class: "flex items-center justify-center py-20",
                            p { class: "text-sm text-red-400", "Failed to load clips: {err}" }
                        }
                    },
                    None => rsx! {
                        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                            for _ in 0..3 {
                                div { class: "h-32 rounded-2xl bg-zinc-800/40 animate-pulse" }
                            }
                        }
                    },
                }
            }
        }
    }
}
