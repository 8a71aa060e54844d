//! Obstacle spawning
//!
//! A spawn event fires once the run's spawn timer passes the spawn interval.
//! Each event places a cluster of one to three obstacles just past the right
//! edge of the screen, left to right, with a landable gap between neighbours.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Obstacle, RunState};
use crate::config::GameConfig;
use crate::difficulty::Tuning;

/// Rolls below this spawn a single obstacle
pub const SINGLE_THRESHOLD: f32 = 0.60;
/// Rolls below this (and not single) spawn a double
pub const DOUBLE_THRESHOLD: f32 = 0.92;

/// Speed multipliers (of the tuned speed) for a lone obstacle
pub const SINGLE_SPEEDS: [f32; 3] = [0.9, 1.0, 1.05];
/// First obstacle of a double: slower or normal
pub const DOUBLE_FIRST_SPEEDS: [f32; 3] = [0.8, 0.9, 1.0];
/// Second obstacle of a double: normal or faster
pub const DOUBLE_SECOND_SPEEDS: [f32; 3] = [1.0, 1.15, 1.3];
/// Fixed multipliers for the three members of a triple
pub const TRIPLE_SPEEDS: [f32; 3] = [0.8, 1.0, 1.25];

/// Shape of a spawn event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterKind {
    Single,
    Double,
    Triple,
}

impl ClusterKind {
    /// Map a uniform roll in [0, 1) to a cluster shape
    pub fn from_roll(roll: f32) -> Self {
        if roll < SINGLE_THRESHOLD {
            ClusterKind::Single
        } else if roll < DOUBLE_THRESHOLD {
            ClusterKind::Double
        } else {
            ClusterKind::Triple
        }
    }

    /// Number of obstacles in the cluster
    pub fn count(&self) -> usize {
        match self {
            ClusterKind::Single => 1,
            ClusterKind::Double => 2,
            ClusterKind::Triple => 3,
        }
    }
}

/// Decides when and what to spawn. Owns the seeded RNG so runs replay exactly.
#[derive(Debug, Clone)]
pub struct Spawner {
    seed: u64,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this spawner was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance the spawn timer and spawn a cluster if it is due.
    ///
    /// Returns how many obstacles were appended.
    pub fn update(&mut self, run: &mut RunState, tuning: &Tuning, config: &GameConfig, dt: f32) -> usize {
        run.spawn_timer += dt;
        if run.spawn_timer <= tuning.spawn_interval {
            return 0;
        }
        run.spawn_timer = 0.0;

        let kind = ClusterKind::from_roll(self.rng.random::<f32>());
        self.spawn_cluster(kind, run, tuning, config)
    }

    /// Append a cluster of the given shape to the run
    pub fn spawn_cluster(
        &mut self,
        kind: ClusterKind,
        run: &mut RunState,
        tuning: &Tuning,
        config: &GameConfig,
    ) -> usize {
        let members: Vec<(Vec2, f32)> = match kind {
            ClusterKind::Single => {
                let size = self.pick_size(config);
                vec![(size, self.pick(&SINGLE_SPEEDS))]
            }
            ClusterKind::Double => {
                let first = self.pick_size(config);
                let second = self.pick_size(config);
                vec![
                    (first, self.pick(&DOUBLE_FIRST_SPEEDS)),
                    (second, self.pick(&DOUBLE_SECOND_SPEEDS)),
                ]
            }
            ClusterKind::Triple => TRIPLE_SPEEDS
                .iter()
                .map(|&mult| (self.pick_size(config), mult))
                .collect(),
        };

        let jitter = match kind {
            ClusterKind::Triple => config.triple_jitter,
            _ => config.double_jitter,
        };

        let mut x = config.spawn_x();
        let mut prev_width: Option<f32> = None;
        for (size, mult) in &members {
            if let Some(w) = prev_width {
                x += w + config.min_cluster_gap + self.rng.random_range(0..=jitter) as f32;
            }
            let id = run.next_obstacle_id();
            run.obstacles
                .push(Obstacle::on_ground(id, x, *size, tuning.speed * mult, config.ground_y));
            prev_width = Some(size.x);
        }

        log::debug!(
            "Spawned {:?} cluster at tick {} ({} active)",
            kind,
            run.ticks,
            run.obstacles.len()
        );
        kind.count()
    }

    fn pick_size(&mut self, config: &GameConfig) -> Vec2 {
        if config.obstacle_presets.is_empty() {
            let (w, h) = crate::consts::OBSTACLE_PRESETS[0];
            return Vec2::new(w, h);
        }
        config.obstacle_presets[self.rng.random_range(0..config.obstacle_presets.len())]
    }

    fn pick(&mut self, choices: &[f32; 3]) -> f32 {
        choices[self.rng.random_range(0..choices.len())]
    }
}
