use crate::api::{get_current_user, User};
use crate::components::{AppView, Navbar};
use crate::db;
use crate::playback::VolumeLevel;
use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Current playback volume, shared between the player glue and the UI.
#[derive(Clone, Copy)]
pub struct VolumeSignal(pub Signal<VolumeLevel>);

/// The signed-in user, if any.
#[derive(Clone, Copy)]
pub struct SessionSignal(pub Signal<Option<User>>);

#[component]
pub fn AppShell() -> Element {
    let mut volume = use_signal(VolumeLevel::default);
    let mut session = use_signal(|| None::<User>);

    use_context_provider(|| VolumeSignal(volume));
    use_context_provider(|| SessionSignal(session));

    // Load persisted settings and the current session on mount.
    use_effect(move || {
        if let Err(err) = db::initialize_database() {
            tracing::error!("failed to initialize settings database: {err}");
            return;
        }
        volume.set(db::load_volume());

        spawn(async move {
            match get_current_user().await {
                Ok(user) => session.set(user),
                Err(err) => tracing::warn!("failed to load session: {err}"),
            }
        });
    });

    rsx! {
        div { class: "app-container min-h-screen bg-zinc-950 text-white",
            Navbar {}

            // Main scrollable content
            main { class: "page-shell max-w-5xl mx-auto px-4 py-6",
                Outlet::<AppView> {}
            }
        }
    }
}
