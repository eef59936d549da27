use std::cell::RefCell;

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::VolumeSignal;
use crate::db;
use crate::playback::{
    run_cycle, BootstrapConfig, BootstrapError, CycleCounter, CyclePhase, VolumeLevel, VolumeStore,
    VolumeSync,
};

use super::shaka::{probe_player_handle, VolumeSubscription, VIDEO_ELEMENT_ID};

thread_local! {
    static VOLUME_SUBSCRIPTION: RefCell<Option<VolumeSubscription>> = const { RefCell::new(None) };
}

fn replace_volume_subscription(subscription: Option<VolumeSubscription>) {
    VOLUME_SUBSCRIPTION.with(|slot| *slot.borrow_mut() = subscription);
}

/// Storage half of the volume sync: the persisted setting.
struct PersistedVolume;

impl VolumeStore for PersistedVolume {
    fn load(&self) -> VolumeLevel {
        db::load_volume()
    }

    fn save(&mut self, level: VolumeLevel) {
        db::save_volume(level);
    }
}

#[component]
pub fn ClipPlayer(clip_id: ReadOnlySignal<String>) -> Element {
    let mut phase = use_signal(|| CyclePhase::AwaitingHandle);
    let mut volume = use_context::<VolumeSignal>().0;
    let cycles = use_hook(CycleCounter::new);
    let mut last_clip = use_signal(|| None::<String>);

    // Tear the cycle down with the view: stale continuations and the live
    // volume listener must not outlive the element they observe.
    use_drop({
        let cycles = cycles.clone();
        move || {
            cycles.invalidate();
            replace_volume_subscription(None);
        }
    });

    {
        let cycles = cycles.clone();
        use_effect(move || {
            let id = clip_id();
            // Re-renders must not restart the cycle for the same clip.
            if last_clip.peek().as_deref() == Some(id.as_str()) {
                return;
            }
            last_clip.set(Some(id.clone()));

            // Starting a new cycle invalidates every continuation of the
            // previous one; its late results are discarded, not applied.
            let guard = cycles.begin();
            replace_volume_subscription(None);

            let mut sync = VolumeSync::new(PersistedVolume);
            let initial = sync.initial();
            volume.set(initial);
            phase.set(CyclePhase::AwaitingHandle);

            let runtime = Runtime::current();
            let listener_guard = guard.clone();
            spawn(async move {
                let result = run_cycle(
                    &id,
                    initial,
                    &BootstrapConfig::default(),
                    &guard,
                    probe_player_handle,
                    move |next| phase.set(next),
                )
                .await;

                match result {
                    Ok(handle) => {
                        let subscription =
                            VolumeSubscription::attach(&handle, listener_guard, move |fraction| {
                                let _guard = RuntimeGuard::new(runtime.clone());
                                let level = sync.on_live_change(fraction);
                                volume.set(level);
                            });
                        replace_volume_subscription(subscription);
                    }
                    Err(BootstrapError::Superseded) => {}
                    Err(err) => {
                        tracing::warn!("clip playback failed for {id}: {err}");
                    }
                }
            });
        });
    }

    let current_phase = phase();

    rsx! {
        div { class: "clip-player relative rounded-2xl overflow-hidden bg-black",
            video {
                id: VIDEO_ELEMENT_ID,
                class: "w-full aspect-video bg-black",
                controls: true,
            }
            {
                match current_phase {
                    CyclePhase::AwaitingHandle | CyclePhase::LoadingManifest => rsx! {
                        div { class: "absolute inset-0 flex items-center justify-center bg-black/60 pointer-events-none",
                            span { class: "text-sm text-zinc-300 animate-pulse", "Loading clip…" }
                        }
                    },
                    CyclePhase::Aborted(err) => rsx! {
                        div { class: "absolute inset-0 flex items-center justify-center bg-black/80",
                            div { class: "text-center space-y-1",
                                p { class: "text-sm font-medium text-red-400", "Playback unavailable" }
                                p { class: "text-xs text-zinc-400", "{err}" }
                            }
                        }
                    },
                    CyclePhase::Playing => rsx! {},
                }
            }
        }
        div { class: "flex justify-end mt-1",
            span { class: "text-xs text-zinc-500", "Volume {volume()}" }
        }
    }
}
