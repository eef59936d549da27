//! Player bootstrap and volume synchronization.
//!
//! Binding an externally-owned adaptive player widget to a clip is a small
//! state machine: wait for the widget's instance to exist, feed it exactly one
//! manifest URL, start playback, then keep the persisted volume and the live
//! element volume in agreement. Every asynchronous step is tagged with a cycle
//! generation so results that arrive after navigation are dropped instead of
//! mutating state that now belongs to a different clip.

mod cycle;
mod manifest;
mod readiness;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod testing;
mod volume;

pub use cycle::{run_cycle, BootstrapConfig, CycleCounter, CycleGuard, CyclePhase};
pub use manifest::{load_and_play, manifest_url, ManifestPlayer};
pub use readiness::{await_handle, PollConfig};
pub use volume::{VolumeLevel, VolumeStore, VolumeSync};

use thiserror::Error;

/// Why a bootstrap cycle stopped before (or after) reaching playback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BootstrapError {
    /// The player instance never appeared within the configured deadline.
    #[error("player was not ready after {waited_ms} ms")]
    Timeout { waited_ms: u64 },

    /// The player rejected the manifest.
    #[error("failed to load clip: {0}")]
    Load(#[from] LoadError),

    /// A newer cycle took over; the result of this one must be discarded.
    #[error("superseded by a newer playback cycle")]
    Superseded,
}

/// Failure reported by the player's asynchronous `load` operation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
