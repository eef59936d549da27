//! Manifest URL construction and the load-then-play step.

use super::{BootstrapError, CycleGuard, LoadError};

/// Surface of the external player widget the bootstrap drives.
///
/// The real implementation wraps the third-party player instance and its
/// media element; tests substitute fakes.
pub trait ManifestPlayer {
    /// Asynchronously loads an adaptive-streaming manifest.
    async fn load(&self, url: &str) -> Result<(), LoadError>;

    /// Starts playback on the underlying media element.
    fn begin_playback(&self);

    /// Sets the media element volume as a `[0.0, 1.0]` fraction.
    fn set_volume(&self, fraction: f64);
}

/// Builds the manifest URL for a clip. The identifier is opaque and may
/// contain characters that need escaping in a path segment.
pub fn manifest_url(base: &str, clip_id: &str) -> String {
    format!(
        "{}/clips/{}/dash.mpd",
        base.trim_end_matches('/'),
        urlencoding::encode(clip_id)
    )
}

/// Loads the manifest exactly once and starts playback.
///
/// The guard is re-checked after the load completes: a result that arrives
/// after the cycle was superseded is discarded without touching the player,
/// whether it succeeded or failed.
pub async fn load_and_play<P: ManifestPlayer>(
    player: &P,
    url: &str,
    guard: &CycleGuard,
) -> Result<(), BootstrapError> {
    let loaded = player.load(url).await;
    if !guard.is_current() {
        return Err(BootstrapError::Superseded);
    }
    loaded?;
    player.begin_playback();
    Ok(())
}
