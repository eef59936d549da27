//! Bindings to the external Shaka player widget and its media element.

use dioxus::prelude::spawn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlVideoElement};

use crate::playback::{CycleGuard, LoadError, ManifestPlayer};

pub const VIDEO_ELEMENT_ID: &str = "clipstream-video";

// The player instance is parked on the element itself so re-probes and
// remounts of the same element reuse it instead of stacking instances.
const PLAYER_PROP: &str = "__clipstreamPlayer";

#[wasm_bindgen]
extern "C" {
    /// `shaka.Player` from the compiled player script.
    #[wasm_bindgen(js_namespace = shaka, js_name = Player)]
    pub type ShakaPlayer;

    #[wasm_bindgen(constructor, js_namespace = shaka, js_class = "Player")]
    pub fn new(media: &HtmlVideoElement) -> ShakaPlayer;

    #[wasm_bindgen(method)]
    pub fn load(this: &ShakaPlayer, url: &str) -> js_sys::Promise;
}

/// The externally-owned player instance plus its media element. Valid only
/// while the hosting view keeps the element mounted.
#[derive(Clone)]
pub struct ClipPlayerHandle {
    player: ShakaPlayer,
    video: HtmlVideoElement,
}

/// Checks whether the player can be driven yet: the video element must be in
/// the document and the player script loaded. Neither signals readiness on
/// its own, which is why the bootstrap polls this.
pub fn probe_player_handle() -> Option<ClipPlayerHandle> {
    let document = window()?.document()?;
    let video: HtmlVideoElement = document
        .get_element_by_id(VIDEO_ELEMENT_ID)?
        .dyn_into()
        .ok()?;
    if !script_loaded() {
        return None;
    }

    let video_js = JsValue::from(video.clone());
    let existing = js_sys::Reflect::get(&video_js, &PLAYER_PROP.into()).ok()?;
    let player: ShakaPlayer = if existing.is_undefined() || existing.is_null() {
        let player = ShakaPlayer::new(&video);
        js_sys::Reflect::set(&video_js, &PLAYER_PROP.into(), player.as_ref()).ok()?;
        player
    } else {
        existing.unchecked_into()
    };

    Some(ClipPlayerHandle { player, video })
}

fn script_loaded() -> bool {
    let Some(win) = window() else {
        return false;
    };
    js_sys::Reflect::get(win.as_ref(), &"shaka".into())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

fn load_failure_message(err: &JsValue) -> String {
    // Shaka rejects with a shaka.util.Error carrying a numeric code.
    if let Some(code) = js_sys::Reflect::get(err, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
    {
        return format!("player error code {}", code as u32);
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string()
        .unwrap_or_else(|| "manifest load failed".to_string())
}

impl ManifestPlayer for ClipPlayerHandle {
    async fn load(&self, url: &str) -> Result<(), LoadError> {
        JsFuture::from(self.player.load(url))
            .await
            .map(|_| ())
            .map_err(|err| LoadError::new(load_failure_message(&err)))
    }

    fn begin_playback(&self) {
        // play() returns a promise the browser may reject (autoplay policy);
        // resolve it off to the side.
        if let Ok(promise) = self.video.play() {
            spawn(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }

    fn set_volume(&self, fraction: f64) {
        self.video.set_volume(fraction.clamp(0.0, 1.0));
    }
}

/// Live volume-change subscription. Dropping it detaches the listener so a
/// finished cycle can never observe a disposed media element.
pub struct VolumeSubscription {
    video: HtmlVideoElement,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl VolumeSubscription {
    /// Subscribes to the media element's volume-change notifications. Events
    /// from a superseded cycle are dropped by the guard check before they
    /// reach `on_change`.
    pub fn attach(
        handle: &ClipPlayerHandle,
        guard: CycleGuard,
        mut on_change: impl FnMut(f64) + 'static,
    ) -> Option<Self> {
        let video = handle.video.clone();
        let observed = video.clone();
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if !guard.is_current() {
                return;
            }
            on_change(observed.volume());
        }) as Box<dyn FnMut(web_sys::Event)>);

        video
            .add_event_listener_with_callback("volumechange", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { video, callback })
    }
}

impl Drop for VolumeSubscription {
    fn drop(&mut self) {
        let _ = self.video.remove_event_listener_with_callback(
            "volumechange",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
