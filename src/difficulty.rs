//! Difficulty presets
//!
//! Each preset scales the base obstacle speed and the base spawn interval.
//! The selection is made on the menu and stays fixed for the whole run.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Speed and spawn-interval multipliers for a preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub speed: f32,
    pub spawn: f32,
}

/// Per-preset multiplier table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub easy: Multipliers,
    pub normal: Multipliers,
    pub hard: Multipliers,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: Multipliers { speed: 0.8, spawn: 1.25 },
            normal: Multipliers { speed: 1.0, spawn: 1.0 },
            hard: Multipliers { speed: 1.35, spawn: 0.75 },
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, difficulty: Difficulty) -> Multipliers {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }

    /// Look up multipliers by name; anything unrecognised gets the normal preset
    pub fn resolve(&self, name: &str) -> Multipliers {
        self.get(Difficulty::from_name(name))
    }
}

impl Difficulty {
    /// All presets in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Like [`Difficulty::parse`] but never fails
    pub fn from_name(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!("Unknown difficulty {:?}, using normal", s);
            Difficulty::Normal
        })
    }
}

/// Effective obstacle speed and spawn interval for the active preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Pixels per second before per-obstacle variation
    pub speed: f32,
    /// Seconds between spawn events
    pub spawn_interval: f32,
}

impl Tuning {
    pub fn for_difficulty(config: &GameConfig, difficulty: Difficulty) -> Self {
        let m = config.difficulties.get(difficulty);
        Self {
            speed: config.base_speed * m.speed,
            spawn_interval: config.base_spawn_interval * m.spawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names() {
        let table = DifficultyTable::default();
        assert_eq!(table.resolve("easy"), Multipliers { speed: 0.8, spawn: 1.25 });
        assert_eq!(table.resolve("NORMAL"), Multipliers { speed: 1.0, spawn: 1.0 });
        assert_eq!(table.resolve("Hard"), Multipliers { speed: 1.35, spawn: 0.75 });
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_normal() {
        let table = DifficultyTable::default();
        assert_eq!(table.resolve("nightmare"), table.normal);
        assert_eq!(table.resolve(""), table.normal);
    }

    #[test]
    fn test_tuning_hard() {
        let tuning = Tuning::for_difficulty(&GameConfig::default(), Difficulty::Hard);
        assert!((tuning.speed - 378.0).abs() < 1e-3);
        assert!((tuning.spawn_interval - 0.975).abs() < 1e-5);
    }

    #[test]
    fn test_tuning_easy() {
        let tuning = Tuning::for_difficulty(&GameConfig::default(), Difficulty::Easy);
        assert!((tuning.speed - 224.0).abs() < 1e-3);
        assert!((tuning.spawn_interval - 1.625).abs() < 1e-5);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let back: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(back, Difficulty::Easy);
    }
}
