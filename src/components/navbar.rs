use crate::api::logout;
use crate::components::{AppView, SessionSignal};
use dioxus::logger::tracing;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<SessionSignal>().0;

    rsx! {
        nav { class: "border-b border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl sticky top-0 z-20",
            div { class: "max-w-5xl mx-auto px-4 py-3 flex items-center justify-between",
                Link {
                    to: AppView::Home {},
                    class: "text-lg font-semibold text-white tracking-tight",
                    "ClipStream"
                }

                div { class: "flex items-center gap-4 text-sm",
                    {
                        match session() {
                            Some(user) => rsx! {
                                Link {
                                    to: AppView::UserClips { id: user.id.clone() },
                                    class: "text-zinc-300 hover:text-white transition-colors",
                                    "{user.username}"
                                }
                                button {
                                    class: "px-3 py-1.5 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                                    onclick: move |_| {
                                        spawn(async move {
                                            match logout().await {
                                                Ok(_) => session.set(None),
                                                Err(err) => tracing::warn!("logout failed: {err}"),
                                            }
                                        });
                                    },
                                    "Log out"
                                }
                            },
                            None => rsx! {
                                Link {
                                    to: AppView::Login {},
                                    class: "text-zinc-300 hover:text-white transition-colors",
                                    "Log in"
                                }
                                Link {
                                    to: AppView::Register {},
                                    class: "px-3 py-1.5 rounded-lg bg-emerald-500/20 text-emerald-400 hover:bg-emerald-500/30 transition-colors",
                                    "Register"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
