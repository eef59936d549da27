//! Fake player implementations shared by the playback tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{LoadError, ManifestPlayer};

enum Behavior {
    Ready,
    Fail(String),
    Slow(Duration),
}

/// In-memory stand-in for the external player widget. Records every `load`,
/// `play`, and volume write so tests can assert exact call counts.
#[derive(Clone)]
pub(crate) struct FakePlayer {
    inner: Arc<Inner>,
}

struct Inner {
    behavior: Behavior,
    loads: Mutex<Vec<String>>,
    plays: AtomicUsize,
    volumes: Mutex<Vec<f64>>,
}

impl FakePlayer {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            inner: Arc::new(Inner {
                behavior,
                loads: Mutex::new(Vec::new()),
                plays: AtomicUsize::new(0),
                volumes: Mutex::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn ready() -> Self {
        Self::with_behavior(Behavior::Ready)
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::with_behavior(Behavior::Fail(message.to_string()))
    }

    pub(crate) fn slow(delay: Duration) -> Self {
        Self::with_behavior(Behavior::Slow(delay))
    }

    pub(crate) fn loads(&self) -> Vec<String> {
        self.inner.loads.lock().unwrap().clone()
    }

    pub(crate) fn play_count(&self) -> usize {
        self.inner.plays.load(Ordering::SeqCst)
    }

    pub(crate) fn volumes(&self) -> Vec<f64> {
        self.inner.volumes.lock().unwrap().clone()
    }
}

impl ManifestPlayer for FakePlayer {
    async fn load(&self, url: &str) -> Result<(), LoadError> {
        self.inner.loads.lock().unwrap().push(url.to_string());
        match &self.inner.behavior {
            Behavior::Ready => Ok(()),
            Behavior::Fail(message) => Err(LoadError::new(message.clone())),
            Behavior::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(())
            }
        }
    }

    fn begin_playback(&self) {
        self.inner.plays.fetch_add(1, Ordering::SeqCst);
    }

    fn set_volume(&self, fraction: f64) {
        self.inner.volumes.lock().unwrap().push(fraction);
    }
}
