//! Platform abstraction layer
//!
//! Handles the edge between the game core and whatever hosts it:
//! - Input events (keyboard / pointer) to commands

pub mod input;

pub use input::{InputEvent, Key, MenuLayout, translate};
