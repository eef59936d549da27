//! One bootstrap cycle: handle acquisition through playback start.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::manifest::{load_and_play, manifest_url, ManifestPlayer};
use super::readiness::{await_handle, PollConfig};
use super::volume::VolumeLevel;
use super::BootstrapError;

/// Settings for a bootstrap cycle.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Base path the manifest URL is built from.
    pub manifest_base: String,
    pub poll: PollConfig,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            manifest_base: "/api".to_string(),
            poll: PollConfig::default(),
        }
    }
}

/// Where a cycle currently stands. Surfaced to the view so "loading" and
/// "not playing" are distinguishable states.
#[derive(Debug, Clone, PartialEq)]
pub enum CyclePhase {
    AwaitingHandle,
    LoadingManifest,
    Playing,
    Aborted(BootstrapError),
}

/// Issues cycle generations. Beginning a new cycle atomically invalidates
/// every guard handed out before it.
#[derive(Clone, Default)]
pub struct CycleCounter {
    current: Arc<AtomicU64>,
}

impl CycleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new cycle and returns its guard.
    pub fn begin(&self) -> CycleGuard {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        CycleGuard {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Invalidates the active cycle without starting another, e.g. when the
    /// hosting view unmounts.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// Tag carried by every asynchronous continuation of a cycle. Continuations
/// check it before applying effects and discard themselves once stale.
#[derive(Clone)]
pub struct CycleGuard {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl CycleGuard {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Runs one bootstrap cycle to completion: waits for the player handle,
/// applies the initial volume, loads the clip's manifest exactly once, and
/// starts playback.
///
/// Phase transitions are reported through `on_phase`, but never once the
/// guard is stale; a superseded cycle ends with [`BootstrapError::Superseded`]
/// and leaves no other trace. Returns the ready handle so the caller can bind
/// volume-change listeners to it.
pub async fn run_cycle<H, P, F>(
    clip_id: &str,
    initial_volume: VolumeLevel,
    config: &BootstrapConfig,
    guard: &CycleGuard,
    probe: P,
    mut on_phase: F,
) -> Result<H, BootstrapError>
where
    H: ManifestPlayer,
    P: FnMut() -> Option<H>,
    F: FnMut(CyclePhase),
{
    let mut emit = |phase: CyclePhase| {
        if guard.is_current() {
            on_phase(phase);
        }
    };

    tracing::debug!(
        clip_id,
        generation = guard.generation(),
        "starting playback bootstrap"
    );
    emit(CyclePhase::AwaitingHandle);

    let player = match await_handle(probe, &config.poll, guard).await {
        Ok(player) => player,
        Err(err) => {
            if !matches!(err, BootstrapError::Superseded) {
                emit(CyclePhase::Aborted(err.clone()));
            }
            return Err(err);
        }
    };

    player.set_volume(initial_volume.as_fraction());
    emit(CyclePhase::LoadingManifest);

    let url = manifest_url(&config.manifest_base, clip_id);
    if let Err(err) = load_and_play(&player, &url, guard).await {
        if !matches!(err, BootstrapError::Superseded) {
            tracing::warn!(clip_id, error = %err, "playback bootstrap aborted");
            emit(CyclePhase::Aborted(err.clone()));
        }
        return Err(err);
    }

    tracing::debug!(clip_id, "playback started");
    emit(CyclePhase::Playing);
    Ok(player)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::playback::testing::FakePlayer;
    use crate::playback::LoadError;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn test_config() -> BootstrapConfig {
        BootstrapConfig {
            manifest_base: "/api".to_string(),
            poll: PollConfig {
                poll_interval: Duration::from_millis(100),
                ready_deadline: Duration::from_secs(1),
            },
        }
    }

    fn phase_recorder() -> (Arc<Mutex<Vec<CyclePhase>>>, impl FnMut(CyclePhase)) {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&phases);
        (phases, move |phase| sink.lock().unwrap().push(phase))
    }

    #[tokio::test(start_paused = true)]
    async fn full_cycle_loads_once_and_plays_at_stored_volume() {
        let counter = CycleCounter::new();
        let guard = counter.begin();
        let player = FakePlayer::ready();
        let initial = VolumeLevel::decode(Some("45"));
        let (phases, on_phase) = phase_recorder();

        let result = run_cycle(
            "abc123",
            initial,
            &test_config(),
            &guard,
            || Some(player.clone()),
            on_phase,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(player.loads(), vec!["/api/clips/abc123/dash.mpd"]);
        assert_eq!(player.play_count(), 1);
        assert_eq!(player.volumes(), vec![0.45]);
        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                CyclePhase::AwaitingHandle,
                CyclePhase::LoadingManifest,
                CyclePhase::Playing,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn handle_appearing_late_still_loads_exactly_once() {
        let counter = CycleCounter::new();
        let guard = counter.begin();
        let player = FakePlayer::ready();
        let mut checks = 0u32;
        let (_, on_phase) = phase_recorder();

        let result = run_cycle(
            "abc123",
            VolumeLevel::default(),
            &test_config(),
            &guard,
            || {
                checks += 1;
                (checks >= 5).then(|| player.clone())
            },
            on_phase,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(player.loads().len(), 1);
        assert_eq!(player.play_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn never_ready_handle_times_out_without_loading() {
        let counter = CycleCounter::new();
        let guard = counter.begin();
        let (phases, on_phase) = phase_recorder();

        let result = run_cycle(
            "abc123",
            VolumeLevel::default(),
            &test_config(),
            &guard,
            || None::<FakePlayer>,
            on_phase,
        )
        .await;

        assert_eq!(result, Err(BootstrapError::Timeout { waited_ms: 1000 }));
        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                CyclePhase::AwaitingHandle,
                CyclePhase::Aborted(BootstrapError::Timeout { waited_ms: 1000 }),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn load_failure_aborts_the_cycle_visibly() {
        let counter = CycleCounter::new();
        let guard = counter.begin();
        let player = FakePlayer::failing("unsupported codec");
        let (phases, on_phase) = phase_recorder();

        let result = run_cycle(
            "abc123",
            VolumeLevel::default(),
            &test_config(),
            &guard,
            || Some(player.clone()),
            on_phase,
        )
        .await;

        let expected = BootstrapError::Load(LoadError::new("unsupported codec"));
        assert_eq!(result, Err(expected.clone()));
        assert_eq!(player.play_count(), 0);
        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                CyclePhase::AwaitingHandle,
                CyclePhase::LoadingManifest,
                CyclePhase::Aborted(expected),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn identifier_change_discards_old_cycle_and_loads_new_one_once() {
        let counter = CycleCounter::new();
        let guard_a = counter.begin();
        let player_a = FakePlayer::slow(Duration::from_secs(5));
        let (phases_a, on_phase_a) = phase_recorder();

        let cycle_a = tokio::spawn({
            let player_a = player_a.clone();
            let config = test_config();
            async move {
                run_cycle(
                    "a",
                    VolumeLevel::default(),
                    &config,
                    &guard_a,
                    move || Some(player_a.clone()),
                    on_phase_a,
                )
                .await
            }
        });

        // Let cycle "a" reach its manifest load, then navigate to clip "b".
        tokio::time::sleep(Duration::from_millis(200)).await;
        let guard_b = counter.begin();
        let player_b = FakePlayer::ready();
        let (phases_b, on_phase_b) = phase_recorder();

        let result_b = run_cycle(
            "b",
            VolumeLevel::default(),
            &test_config(),
            &guard_b,
            || Some(player_b.clone()),
            on_phase_b,
        )
        .await;

        let result_a = cycle_a.await.expect("cycle task panicked");

        assert!(result_b.is_ok());
        assert_eq!(result_a, Err(BootstrapError::Superseded));
        // The old cycle's late completion never starts playback, and it
        // reports no phase after being superseded.
        assert_eq!(player_a.play_count(), 0);
        assert_eq!(
            *phases_a.lock().unwrap(),
            vec![CyclePhase::AwaitingHandle, CyclePhase::LoadingManifest]
        );
        assert_eq!(player_b.loads(), vec!["/api/clips/b/dash.mpd"]);
        assert_eq!(player_b.play_count(), 1);
        assert_eq!(
            *phases_b.lock().unwrap(),
            vec![
                CyclePhase::AwaitingHandle,
                CyclePhase::LoadingManifest,
                CyclePhase::Playing,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_invalidates_the_active_cycle() {
        let counter = CycleCounter::new();
        let guard = counter.begin();
        let (phases, on_phase) = phase_recorder();
        let config = BootstrapConfig {
            poll: PollConfig {
                poll_interval: Duration::from_millis(100),
                ready_deadline: Duration::from_secs(3600),
            },
            ..test_config()
        };

        let cycle = tokio::spawn(async move {
            run_cycle(
                "abc123",
                VolumeLevel::default(),
                &config,
                &guard,
                || None::<FakePlayer>,
                on_phase,
            )
            .await
        });

        tokio::time::sleep(Duration::from_millis(300)).await;
        counter.invalidate();

        let result = cycle.await.expect("cycle task panicked");
        assert_eq!(result, Err(BootstrapError::Superseded));
        assert_eq!(*phases.lock().unwrap(), vec![CyclePhase::AwaitingHandle]);
    }
}
