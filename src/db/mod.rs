//! Persisted playback settings.
//!
//! The web build keeps settings in browser local storage; desktop builds use
//! a small SQLite key/value table. Both store the volume as a base-10 integer
//! percentage string, decoded through [`VolumeLevel`] so a malformed value
//! degrades to the default instead of propagating.

use crate::playback::VolumeLevel;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

const VOLUME_KEY: &str = "volume";

/// Error type for database operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl DbError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::error::Error for DbError {}

#[cfg(target_arch = "wasm32")]
pub fn load_volume() -> VolumeLevel {
    let raw = LocalStorage::raw().get_item(VOLUME_KEY).ok().flatten();
    VolumeLevel::decode(raw.as_deref())
}

#[cfg(target_arch = "wasm32")]
pub fn save_volume(level: VolumeLevel) {
    if let Err(err) = LocalStorage::raw().set_item(VOLUME_KEY, &level.percent().to_string()) {
        tracing::warn!(?err, "failed to persist volume");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_volume() -> VolumeLevel {
    let raw = get_db_connection().ok().and_then(|conn| {
        conn.query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [VOLUME_KEY],
            |row: &rusqlite::Row| row.get::<_, String>(0),
        )
        .ok()
    });
    VolumeLevel::decode(raw.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_volume(level: VolumeLevel) {
    let result = get_db_connection().and_then(|conn| {
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            [VOLUME_KEY, &level.percent().to_string()],
        )
        .map_err(|e| DbError::new(e.to_string()))
    });
    if let Err(err) = result {
        tracing::warn!(%err, "failed to persist volume");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn initialize_database() -> Result<(), std::convert::Infallible> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    use std::path::PathBuf;

    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("clipstream"))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| DbError::new(format!("Failed to create data directory: {}", e)))?;

    rusqlite::Connection::open(data_dir.join("clipstream.db"))
        .map_err(|e| DbError::new(format!("Failed to open database: {}", e)))
}
