use dioxus::prelude::*;

use crate::api::get_clip;
use crate::components::{AppView, ClipPlayer};
use crate::utils::views_label;

#[component]
pub fn ClipDetail(id: ReadOnlySignal<String>) -> Element {
    let clip = use_resource(move || async move { get_clip(&id()).await });

    rsx! {
        div { class: "max-w-4xl mx-auto space-y-4",
            {
                match clip() {
                    Some(Ok(Some(clip))) => {
                        let description = clip.description.clone().unwrap_or_default();
                        let views = views_label(clip.views);
                        rsx! {
                            if clip.processing {
                                div { class: "flex flex-col items-center justify-center aspect-video rounded-2xl bg-zinc-900 border border-zinc-800",
                                    p { class: "font-medium text-white", "Still processing" }
                                    p { class: "text-sm text-zinc-400 mt-1",
                                        "This clip is being prepared. Check back in a moment."
                                    }
                                }
                            } else {
                                ClipPlayer { clip_id: clip.id.clone() }
                            }

                            div { class: "p-4 flex flex-row items-start gap-4",
                                div {
                                    h1 { class: "text-2xl font-bold text-white", "{clip.title}" }
                                    if !description.is_empty() {
                                        p { class: "text-zinc-300 mt-1", "{description}" }
                                    }
                                    p { class: "text-sm text-zinc-500 mt-2",
                                        Link {
                                            to: AppView::UserClips { id: clip.creator.id.clone() },
                                            class: "hover:text-white transition-colors",
                                            "{clip.creator.username}"
                                        }
                                    }
                                }
                                div { class: "flex-grow" }
                                p { class: "text-xl text-zinc-400", "{views}" }
                            }
                        }
                    }
                    Some(Ok(None)) => rsx! {
                        div { class: "flex flex-col items-center justify-center py-20",
                            h1 { class: "text-xl font-semibold text-white mb-2", "Clip not found" }
                            p { class: "text-zinc-400", "It may have been removed by its creator." }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "flex items-center justify-center py-20",
                            p { class: "text-sm text-red-400", "Failed to load clip: {err}" }
                        }
                    },
                    None => rsx! {
                        div { class: "aspect-video rounded-2xl bg-zinc-900 animate-pulse" }
                    },
                }
            }
        }
    }
}
