use dioxus::prelude::*;

use crate::api::{get_clips, Clip};
use crate::components::AppView;
use crate::utils::views_label;

#[component]
pub fn Home() -> Element {
    let clips = use_resource(|| async { get_clips().await });

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title", "Latest clips" }
            }

            {
                match clips() {
                    Some(Ok(clips)) => rsx! {
                        if clips.is_empty() {
                            EmptyClips {}
                        } else {
                            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                                for clip in clips {
                                    ClipCard { clip }
                                }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "flex items-center justify-center py-20",
                            p { class: "text-sm text-red-400", "Failed to load clips: {err}" }
                        }
                    },
                    None => rsx! {
                        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                            for _ in 0..6 {
                                div { class: "h-32 rounded-2xl bg-zinc-800/40 animate-pulse" }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn ClipCard(clip: Clip) -> Element {
    let views = views_label(clip.views);
    let created = clip.created_at.format("%b %-d, %Y").to_string();

    rsx! {
        Link {
            to: AppView::ClipDetail { id: clip.id.clone() },
            class: "block bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-4 hover:border-zinc-500/50 transition-colors",
            div { class: "flex items-start justify-between gap-2",
                h2 { class: "font-semibold text-white truncate", "{clip.title}" }
                if clip.processing {
                    span { class: "shrink-0 px-2 py-0.5 rounded-full bg-amber-500/20 text-amber-400 text-xs font-medium",
                        "Processing"
                    }
                }
            }
            p { class: "text-sm text-zinc-400 mt-1", "{clip.creator.username}" }
            div { class: "flex items-center justify-between mt-3 text-xs text-zinc-500",
                span { "{views}" }
                span { "{created}" }
            }
        }
    }
}

#[component]
fn EmptyClips() -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-20",
            h2 { class: "text-xl font-semibold text-white mb-2", "No clips yet" }
            p { class: "text-zinc-400", "Uploaded clips will show up here once they finish processing" }
        }
    }
}
