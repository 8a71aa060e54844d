//! Game configuration
//!
//! Every gameplay constant lives in one immutable struct that is handed to the
//! simulation at construction. Defaults mirror [`crate::consts`]; a JSON file
//! may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::difficulty::DifficultyTable;

/// Complete set of tunable constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_y: f32,

    // === Pace ===
    /// Obstacle speed before the difficulty multiplier (pixels/s)
    pub base_speed: f32,
    /// Seconds between spawns before the difficulty multiplier
    pub base_spawn_interval: f32,
    pub difficulties: DifficultyTable,

    // === Player ===
    pub player_x: f32,
    pub player_size: Vec2,
    pub gravity: f32,
    pub jump_velocity: f32,

    // === Hitboxes ===
    pub player_hitbox_shrink: Vec2,
    pub obstacle_hitbox_shrink: Vec2,

    // === Obstacles ===
    /// (width, height) presets
    pub obstacle_presets: Vec<Vec2>,
    pub spawn_margin: f32,
    pub deletion_margin: f32,
    pub min_cluster_gap: f32,
    pub double_jitter: u32,
    pub triple_jitter: u32,

    // === Scoring ===
    pub score_per_second: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,

            base_speed: BASE_SPEED,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            difficulties: DifficultyTable::default(),

            player_x: PLAYER_X,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            player_hitbox_shrink: Vec2::new(PLAYER_HITBOX_SHRINK.0, PLAYER_HITBOX_SHRINK.1),
            obstacle_hitbox_shrink: Vec2::new(OBSTACLE_HITBOX_SHRINK.0, OBSTACLE_HITBOX_SHRINK.1),

            obstacle_presets: OBSTACLE_PRESETS
                .iter()
                .map(|&(w, h)| Vec2::new(w, h))
                .collect(),
            spawn_margin: SPAWN_MARGIN,
            deletion_margin: DELETION_MARGIN,
            min_cluster_gap: MIN_CLUSTER_GAP,
            double_jitter: DOUBLE_JITTER,
            triple_jitter: TRIPLE_JITTER,

            score_per_second: SCORE_PER_SECOND,
        }
    }
}

impl GameConfig {
    /// Player y when standing on the ground
    #[inline]
    pub fn resting_y(&self) -> f32 {
        self.ground_y - self.player_size.y
    }

    /// x at which new obstacles (the leftmost of a cluster) appear
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.screen_width + self.spawn_margin
    }

    /// Parse a config from JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<GameConfig>(json) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("Invalid config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load a config file; a missing or unreadable file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded config from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values the simulation cannot work with
    fn sanitized(mut self) -> Self {
        if self.obstacle_presets.is_empty() {
            log::warn!("Config has no obstacle presets, restoring defaults");
            self.obstacle_presets = Self::default().obstacle_presets;
        }
        if !(self.base_spawn_interval > 0.0) {
            log::warn!("Config spawn interval {} is not positive, restoring default", self.base_spawn_interval);
            self.base_spawn_interval = BASE_SPAWN_INTERVAL;
        }
        if self.base_speed < 0.0 {
            log::warn!("Config speed {} is negative, restoring default", self.base_speed);
            self.base_speed = BASE_SPEED;
        }
        if !(self.min_cluster_gap >= 0.0) {
            log::warn!("Config cluster gap {} is negative, restoring default", self.min_cluster_gap);
            self.min_cluster_gap = MIN_CLUSTER_GAP;
        }
        self
    }
}
