//! Bounded polling for the externally-owned player instance.

use std::time::Duration;

use super::{BootstrapError, CycleGuard};

/// Cadence and deadline for the readiness poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub poll_interval: Duration,
    pub ready_deadline: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            ready_deadline: Duration::from_secs(10),
        }
    }
}

/// Re-checks `probe` on a fixed interval until it yields a handle.
///
/// The player widget exposes no "ready" notification, so the handle has to be
/// observed into existence. Gives up with [`BootstrapError::Timeout`] once the
/// deadline elapses, and with [`BootstrapError::Superseded`] as soon as the
/// guard's cycle is no longer current, so an abandoned view never keeps a
/// poll alive.
pub async fn await_handle<H>(
    mut probe: impl FnMut() -> Option<H>,
    config: &PollConfig,
    guard: &CycleGuard,
) -> Result<H, BootstrapError> {
    let mut waited = Duration::ZERO;
    loop {
        if !guard.is_current() {
            return Err(BootstrapError::Superseded);
        }
        if let Some(handle) = probe() {
            return Ok(handle);
        }
        if waited >= config.ready_deadline {
            tracing::warn!(
                waited_ms = waited.as_millis() as u64,
                "player instance never became ready"
            );
            return Err(BootstrapError::Timeout {
                waited_ms: waited.as_millis() as u64,
            });
        }
        sleep(config.poll_interval).await;
        waited += config.poll_interval;
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
