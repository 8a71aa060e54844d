//! Demo-mode autopilot
//!
//! Watches the nearest obstacle and jumps just early enough for the feet to
//! clear its hitbox by the time it arrives. Good enough to survive most
//! singles; tight clusters at hard pace will still catch it.

use super::collision::hitbox;
use super::state::RunState;
use crate::config::GameConfig;

/// Seconds of slack added to the computed take-off time
const TAKEOFF_SLACK: f32 = 0.04;

/// Seconds after take-off until the player has risen `height` pixels, if it ever does
fn rise_time(height: f32, jump_velocity: f32, gravity: f32) -> Option<f32> {
    let v = -jump_velocity;
    let disc = v * v - 2.0 * gravity * height;
    if disc < 0.0 || gravity <= 0.0 {
        return None;
    }
    Some((v - disc.sqrt()) / gravity)
}

/// Whether the player should jump this frame
pub fn should_jump(run: &RunState, config: &GameConfig) -> bool {
    if !run.player.grounded {
        return false;
    }

    let player = hitbox(&run.player.rect(), config.player_hitbox_shrink);

    // Nearest obstacle whose hitbox has not yet passed the player
    let next = run
        .obstacles
        .iter()
        .map(|ob| (ob, hitbox(&ob.rect, config.obstacle_hitbox_shrink)))
        .filter(|(_, hb)| hb.right() > player.left())
        .min_by(|a, b| a.1.left().total_cmp(&b.1.left()));

    let Some((obstacle, hb)) = next else {
        return false;
    };

    let distance = hb.left() - player.right();
    if distance <= 0.0 {
        // Already alongside; jumping is the only chance
        return true;
    }
    if obstacle.speed <= 0.0 {
        return false;
    }

    let clearance = player.bottom() - hb.top();
    let Some(takeoff) = rise_time(clearance, config.jump_velocity, config.gravity) else {
        return false;
    };
    distance / obstacle.speed <= takeoff + TAKEOFF_SLACK
}
