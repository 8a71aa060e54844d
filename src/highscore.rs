//! High score persistence
//!
//! A single integer survives between sessions. Native builds keep it in a
//! small JSON file, the browser build in LocalStorage. Reading never fails
//! (anything unusable counts as 0) and writing is best-effort.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

/// Default file name for the native store
pub const DEFAULT_HIGHSCORE_FILE: &str = "dino_high.json";

/// On-disk record: `{ "high": <n> }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScoreRecord {
    #[serde(default, deserialize_with = "whole_score")]
    pub high: u64,
}

impl HighScoreRecord {
    /// Parse a stored record; a missing `high` reads as zero
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Any JSON number, truncated toward zero; negatives count as 0
fn whole_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    Ok(number.as_u64().unwrap_or_else(|| match number.as_f64() {
        Some(value) if value > 0.0 => value as u64,
        _ => 0,
    }))
}

/// Somewhere a high score can be kept
pub trait HighScoreStore {
    /// Stored value, or 0 if there is none or it cannot be read
    fn load(&self) -> u64;
    /// Best-effort write; failures are logged and dropped
    fn save(&mut self, value: u64);
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_FILE)
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u64 {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => match HighScoreRecord::parse(&json) {
                Ok(record) => {
                    log::info!("Loaded high score {} from {}", record.high, self.path.display());
                    record.high
                }
                Err(e) => {
                    log::warn!("Could not parse {}: {}, starting fresh", self.path.display(), e);
                    0
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, value: u64) {
        let record = HighScoreRecord { high: value };
        let result = serde_json::to_string(&record)
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(&self.path, json));
        match result {
            Ok(()) => log::info!("High score {} saved", value),
            Err(e) => log::warn!("Could not save high score to {}: {}", self.path.display(), e),
        }
    }
}

/// Process-local store, forgotten on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub high: u64,
    /// Number of successful saves
    pub saves: u32,
}

impl MemoryStore {
    pub fn with_high(high: u64) -> Self {
        Self { high, saves: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.high
    }

    fn save(&mut self, value: u64) {
        self.high = value;
        self.saves += 1;
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> u64 {
        (**self).load()
    }

    fn save(&mut self, value: u64) {
        (**self).save(value)
    }
}

/// LocalStorage store (WASM only); holds the bare integer as a string
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "dino-high";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> u64 {
        if let Some(storage) = Self::storage() {
            if let Ok(Some(text)) = storage.get_item(Self::STORAGE_KEY) {
                match text.trim().parse::<u64>() {
                    Ok(high) => {
                        log::info!("Loaded high score {}", high);
                        return high;
                    }
                    Err(e) => {
                        log::warn!("Stored high score {:?} is unusable: {}", text, e);
                        return 0;
                    }
                }
            }
        }

        log::info!("No high score found, starting fresh");
        0
    }

    fn save(&mut self, value: u64) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(Self::STORAGE_KEY, &value.to_string()).is_ok() {
                log::info!("High score {} saved", value);
                return;
            }
        }
        log::warn!("Could not save high score");
    }
}
