//! Forgiving collision detection
//!
//! Sprites have transparent corners, so both rectangles are shrunk before the
//! overlap test. A graze that only touches the outer pixels is not a hit.

use glam::Vec2;

use super::rect::Rect;
use super::state::Obstacle;
use crate::config::GameConfig;

/// Shrink a rect by `shrink` (total width, total height), half from each side
#[inline]
pub fn hitbox(rect: &Rect, shrink: Vec2) -> Rect {
    rect.inflate(-shrink.x, -shrink.y)
}

/// Whether the player and obstacle hitboxes overlap
pub fn hitboxes_overlap(player: &Rect, obstacle: &Rect, config: &GameConfig) -> bool {
    let p = hitbox(player, config.player_hitbox_shrink);
    let o = hitbox(obstacle, config.obstacle_hitbox_shrink);
    p.intersects(&o)
}

/// First obstacle (in creation order) that the player is touching
pub fn first_collision<'a>(
    player: &Rect,
    obstacles: &'a [Obstacle],
    config: &GameConfig,
) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|ob| hitboxes_overlap(player, &ob.rect, config))
}
