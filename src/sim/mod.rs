//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick(dt)`
//! - Seeded RNG only
//! - Stable iteration order (obstacles stay in creation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::should_jump;
pub use collision::{first_collision, hitbox, hitboxes_overlap};
pub use rect::Rect;
pub use spawn::{ClusterKind, Spawner};
pub use state::{Obstacle, Player, RunState};
pub use tick::{TickEvent, jump, tick};
