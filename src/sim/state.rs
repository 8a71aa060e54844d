//! Run state and core simulation types
//!
//! Everything that is reset when a run starts lives in [`RunState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// The player's figure; only moves vertically
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    pub grounded: bool,
}

impl Player {
    /// A player standing on the ground
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_x, config.resting_y()),
            size: config.player_size,
            vy: 0.0,
            grounded: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Start a jump. Returns false (and does nothing) when airborne.
    pub fn jump(&mut self, jump_velocity: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vy = jump_velocity;
        self.grounded = false;
        true
    }

    /// Apply gravity for `dt` seconds, then clamp to the ground
    pub fn integrate(&mut self, dt: f32, gravity: f32, resting_y: f32) {
        self.vy += gravity * dt;
        self.pos.y += self.vy * dt;
        if self.pos.y >= resting_y {
            self.pos.y = resting_y;
            self.vy = 0.0;
            self.grounded = true;
        }
    }
}

/// A ground obstacle sliding left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
    /// Leftward speed in pixels/s (never negative)
    pub speed: f32,
}

impl Obstacle {
    /// Obstacle of the given size standing on the ground at `x`
    pub fn on_ground(id: u32, x: f32, size: Vec2, speed: f32, ground_y: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, ground_y - size.y, size.x, size.y),
            speed: speed.max(0.0),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.rect.pos.x -= self.speed * dt;
    }

    /// Right edge is more than `margin` pixels past the left of the screen
    #[inline]
    pub fn is_gone(&self, margin: f32) -> bool {
        self.rect.right() < -margin
    }
}

/// Per-run state (score, spawn timer, obstacles, player)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Continuous score; shown and compared truncated
    pub score: f32,
    /// Seconds since the last spawn event
    pub spawn_timer: f32,
    /// Active obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    pub player: Player,
    /// Simulation tick counter
    pub ticks: u64,
    /// Next obstacle ID
    next_id: u32,
}

impl RunState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0.0,
            spawn_timer: 0.0,
            obstacles: Vec::new(),
            player: Player::new(config),
            ticks: 0,
            next_id: 1,
        }
    }

    /// Back to the starting values
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Score as displayed and persisted
    #[inline]
    pub fn score_int(&self) -> u64 {
        self.score.max(0.0) as u64
    }
}
