//! Per-frame simulation step
//!
//! Advances a running game by `dt` seconds: gravity, spawning, obstacle
//! movement, collision and score, in that order.

use super::collision::first_collision;
use super::spawn::Spawner;
use super::state::RunState;
use crate::config::GameConfig;
use crate::difficulty::Tuning;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Still running
    Continue,
    /// The player hit an obstacle; the run is over
    Collision {
        obstacle_id: u32,
        /// Truncated score at the moment of impact
        score: u64,
    },
}

/// Advance a running game by `dt` seconds.
///
/// Must only be called while the run is live. On collision the score is
/// left untouched and the caller is expected to end the run.
pub fn tick(
    run: &mut RunState,
    spawner: &mut Spawner,
    tuning: &Tuning,
    config: &GameConfig,
    dt: f32,
) -> TickEvent {
    let dt = dt.max(0.0);
    run.ticks += 1;

    // Gravity and ground clamp
    run.player.integrate(dt, config.gravity, config.resting_y());

    spawner.update(run, tuning, config, dt);

    for obstacle in &mut run.obstacles {
        obstacle.advance(dt);
    }
    run.obstacles.retain(|ob| !ob.is_gone(config.deletion_margin));

    if let Some(hit) = first_collision(&run.player.rect(), &run.obstacles, config) {
        return TickEvent::Collision {
            obstacle_id: hit.id,
            score: run.score_int(),
        };
    }

    run.score += dt * config.score_per_second;
    TickEvent::Continue
}

/// Jump if standing on the ground. Returns whether a jump started.
pub fn jump(run: &mut RunState, config: &GameConfig) -> bool {
    run.player.jump(config.jump_velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::difficulty::Difficulty;
    use crate::sim::state::Obstacle;
    use glam::Vec2;

    fn setup() -> (GameConfig, Tuning, RunState, Spawner) {
        let config = GameConfig::default();
        let tuning = Tuning::for_difficulty(&config, Difficulty::Normal);
        let run = RunState::new(&config);
        (config, tuning, run, Spawner::new(12345))
    }

    #[test]
    fn test_score_accrues_ten_per_second() {
        let (config, tuning, mut run, mut spawner) = setup();
        // Keep spawns away so nothing can hit
        let tuning = Tuning {
            spawn_interval: f32::MAX,
            ..tuning
        };
        for _ in 0..60 {
            assert_eq!(tick(&mut run, &mut spawner, &tuning, &config, FRAME_DT), TickEvent::Continue);
        }
        assert!((run.score - 10.0).abs() < 1e-3);
        assert_eq!(run.ticks, 60);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let (config, tuning, mut run, mut spawner) = setup();
        let tuning = Tuning {
            spawn_interval: f32::MAX,
            ..tuning
        };
        assert!(jump(&mut run, &config));
        assert!(!jump(&mut run, &config));

        let mut apex = run.player.pos.y;
        for _ in 0..90 {
            tick(&mut run, &mut spawner, &tuning, &config, FRAME_DT);
            apex = apex.min(run.player.pos.y);
            assert!(run.player.pos.y <= config.resting_y());
        }
        // v²/2g = 470² / 2600 ≈ 85px
        assert!(config.resting_y() - apex > 75.0);
        assert!(run.player.grounded);
        assert_eq!(run.player.vy, 0.0);
    }

    #[test]
    fn test_collision_stops_scoring() {
        let (config, tuning, mut run, mut spawner) = setup();
        run.score = 12.7;
        let id = run.next_obstacle_id();
        run.obstacles
            .push(Obstacle::on_ground(id, 95.0, Vec2::new(28.0, 40.0), 0.0, config.ground_y));

        let event = tick(&mut run, &mut spawner, &tuning, &config, FRAME_DT);
        assert_eq!(event, TickEvent::Collision { obstacle_id: id, score: 12 });
        assert_eq!(run.score, 12.7);
    }

    #[test]
    fn test_offscreen_obstacles_removed() {
        let (config, tuning, mut run, mut spawner) = setup();
        let tuning = Tuning {
            spawn_interval: f32::MAX,
            ..tuning
        };
        let id = run.next_obstacle_id();
        // Right edge at -46, moving 300px/s: past -50 after one 1/60 tick
        run.obstacles
            .push(Obstacle::on_ground(id, -60.0, Vec2::new(14.0, 28.0), 300.0, config.ground_y));
        tick(&mut run, &mut spawner, &tuning, &config, FRAME_DT);
        assert!(run.obstacles.is_empty());
    }

    #[test]
    fn test_obstacles_spawn_and_advance() {
        let (config, tuning, mut run, mut spawner) = setup();
        // First spawn lands on tick 79 at normal pace
        for _ in 0..80 {
            tick(&mut run, &mut spawner, &tuning, &config, FRAME_DT);
        }
        assert!(!run.obstacles.is_empty());
        assert!(run.obstacles[0].rect.left() < config.spawn_x());
    }
}
