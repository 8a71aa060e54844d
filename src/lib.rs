//! Dino Run - a side-scrolling jump-the-cactus reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, scoring)
//! - `session`: Selection / running / game-over state machine
//! - `difficulty`: Easy / normal / hard speed and spawn multipliers
//! - `highscore`: Single-integer high score persistence
//! - `config`: Data-driven game constants
//! - `platform`: Raw input translation

pub mod config;
pub mod difficulty;
pub mod highscore;
pub mod platform;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use difficulty::{Difficulty, Multipliers, Tuning};
pub use highscore::{FileStore, HighScoreRecord, HighScoreStore, MemoryStore};
pub use session::{Command, SessionController, SessionState, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the reference loop
    pub const TARGET_FPS: u32 = 60;
    /// Nominal frame time at the target rate
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Largest dt a single frame may advance the simulation by
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Top of the ground strip; everything stands on this line
    pub const GROUND_Y: f32 = 300.0;

    /// Obstacle speed before the difficulty multiplier (pixels/s)
    pub const BASE_SPEED: f32 = 280.0;
    /// Seconds between spawns before the difficulty multiplier
    pub const BASE_SPAWN_INTERVAL: f32 = 1.3;

    /// Player body
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 44.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1300.0;
    /// Initial vertical velocity of a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -470.0;

    /// Pixels removed from the player rect (horizontal, vertical) before collision tests
    pub const PLAYER_HITBOX_SHRINK: (f32, f32) = (12.0, 8.0);
    /// Pixels removed from an obstacle rect (horizontal, vertical) before collision tests
    pub const OBSTACLE_HITBOX_SHRINK: (f32, f32) = (6.0, 4.0);

    /// Obstacle (width, height) presets
    pub const OBSTACLE_PRESETS: [(f32, f32); 3] = [(14.0, 28.0), (28.0, 40.0), (40.0, 44.0)];
    /// Spawn x is the screen width plus this margin
    pub const SPAWN_MARGIN: f32 = 10.0;
    /// Obstacles are dropped once their right edge is this far left of the screen
    pub const DELETION_MARGIN: f32 = 50.0;
    /// Landable gap guaranteed between consecutive obstacles in a cluster
    pub const MIN_CLUSTER_GAP: f32 = 56.0;
    /// Extra random spacing (inclusive) for the second obstacle of a double
    pub const DOUBLE_JITTER: u32 = 40;
    /// Extra random spacing (inclusive) between members of a triple
    pub const TRIPLE_JITTER: u32 = 30;

    /// Score gained per simulated second
    pub const SCORE_PER_SECOND: f32 = 10.0;
}
