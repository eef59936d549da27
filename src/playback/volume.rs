//! Volume as an integer percentage, plus the persisted/live reconciliation.

const DEFAULT_PERCENT: u8 = 80;

/// Playback volume as a whole percentage in `[0, 100]`.
///
/// The persisted setting and the UI both speak percent; the media element
/// speaks a `[0.0, 1.0]` fraction. Conversions live here so nothing else
/// has to care about the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    pub fn new(percent: u8) -> Option<Self> {
        (percent <= 100).then_some(Self(percent))
    }

    /// Decodes a stored value. Absent, non-numeric, or out-of-range input
    /// falls back to the default of 80.
    pub fn decode(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && (0.0..=100.0).contains(value))
            .map(|value| Self(value.round() as u8))
            .unwrap_or_default()
    }

    /// Converts a live media-element volume to a level. Out-of-range input is
    /// clamped; a non-finite reading falls back to the default.
    pub fn from_fraction(fraction: f64) -> Self {
        if !fraction.is_finite() {
            return Self::default();
        }
        Self((fraction.clamp(0.0, 1.0) * 100.0).round() as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// The `[0.0, 1.0]` value the media element expects.
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(DEFAULT_PERCENT)
    }
}

impl std::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Durable storage for the volume setting.
pub trait VolumeStore {
    fn load(&self) -> VolumeLevel;
    fn save(&mut self, level: VolumeLevel);
}

/// Keeps the persisted volume and the live element volume convergent.
///
/// The persisted value is read once per cycle and applied as the player's
/// initial volume. After that the flow is one-directional: each live
/// volume-change notification is written back to storage and reported for UI
/// state. Storage writes go through a channel that emits no media events, so
/// a write can never trigger another notification.
pub struct VolumeSync<S> {
    store: S,
}

impl<S: VolumeStore> VolumeSync<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The volume a new cycle should start the player at.
    pub fn initial(&self) -> VolumeLevel {
        self.store.load()
    }

    /// Handles one live volume-change notification: persists the new level
    /// and returns it for UI state.
    pub fn on_live_change(&mut self, live_fraction: f64) -> VolumeLevel {
        let level = VolumeLevel::from_fraction(live_fraction);
        self.store.save(level);
        level
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    struct FakeStore {
        stored: Option<String>,
        saves: Vec<VolumeLevel>,
    }

    impl FakeStore {
        fn with(stored: Option<&str>) -> Self {
            Self {
                stored: stored.map(str::to_string),
                saves: Vec::new(),
            }
        }
    }

    impl VolumeStore for FakeStore {
        fn load(&self) -> VolumeLevel {
            VolumeLevel::decode(self.stored.as_deref())
        }

        fn save(&mut self, level: VolumeLevel) {
            self.stored = Some(level.percent().to_string());
            self.saves.push(level);
        }
    }

    #[test]
    fn decode_round_trips_stored_percentages() {
        for percent in [0u8, 1, 45, 80, 100] {
            let decoded = VolumeLevel::decode(Some(&percent.to_string()));
            assert_eq!(decoded.percent(), percent);
        }
    }

    #[test]
    fn decode_falls_back_to_default() {
        assert_eq!(VolumeLevel::decode(None).percent(), 80);
        assert_eq!(VolumeLevel::decode(Some("")).percent(), 80);
        assert_eq!(VolumeLevel::decode(Some("loud")).percent(), 80);
        assert_eq!(VolumeLevel::decode(Some("150")).percent(), 80);
        assert_eq!(VolumeLevel::decode(Some("-5")).percent(), 80);
        assert_eq!(VolumeLevel::decode(Some("NaN")).percent(), 80);
    }

    #[test]
    fn decode_tolerates_fractional_strings() {
        // An older client stored `videoElement.volume * 100` unrounded.
        assert_eq!(VolumeLevel::decode(Some("62.5")).percent(), 63);
        assert_eq!(VolumeLevel::decode(Some(" 45 ")).percent(), 45);
    }

    #[test]
    fn fraction_conversions() {
        assert_eq!(VolumeLevel::from_fraction(0.45).percent(), 45);
        assert_eq!(VolumeLevel::from_fraction(1.7).percent(), 100);
        assert_eq!(VolumeLevel::from_fraction(-0.2).percent(), 0);
        assert_eq!(VolumeLevel::from_fraction(f64::NAN).percent(), 80);
        let level = VolumeLevel::new(45).unwrap();
        assert!((level.as_fraction() - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn initial_volume_comes_from_storage_once() {
        let sync = VolumeSync::new(FakeStore::with(Some("45")));
        assert_eq!(sync.initial().percent(), 45);

        let sync = VolumeSync::new(FakeStore::with(Some("garbage")));
        assert_eq!(sync.initial().percent(), 80);
    }

    #[test]
    fn live_changes_persist_without_feedback() {
        let mut sync = VolumeSync::new(FakeStore::with(Some("80")));

        // Two device-driven changes to the same value are two writes, and the
        // writes themselves produce no further notifications to handle.
        let first = sync.on_live_change(0.6);
        let second = sync.on_live_change(0.6);

        assert_eq!(first.percent(), 60);
        assert_eq!(second.percent(), 60);
        assert_eq!(sync.store.saves, vec![first, second]);
        assert_eq!(sync.store.stored.as_deref(), Some("60"));
    }
}
