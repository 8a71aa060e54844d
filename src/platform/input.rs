//! Raw input to game commands
//!
//! Keyboard and pointer events mean different things on each screen. On the
//! menu the pointer hits buttons; during a run anything jump-like jumps; after
//! a crash Enter or a click returns to the menu.

use glam::Vec2;

use crate::difficulty::Difficulty;
use crate::session::{Command, SessionState};
use crate::sim::Rect;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Up,
    Enter,
    Other,
}

/// Platform-neutral input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Primary button / touch at a screen position
    PointerDown(Vec2),
}

/// Menu button placement
#[derive(Debug, Clone)]
pub struct MenuLayout {
    /// Large centered difficulty buttons
    pub difficulty_buttons: [(Difficulty, Rect); 3],
    /// Large centered start button
    pub start_button: Rect,
    /// Small header buttons, checked only when nothing else was hit
    pub header_buttons: [(Difficulty, Rect); 3],
}

impl MenuLayout {
    const BUTTON_WIDTH: f32 = 120.0;
    const BUTTON_HEIGHT: f32 = 44.0;
    const BUTTON_GAP: f32 = 14.0;
    const BUTTON_Y: f32 = 160.0;

    pub fn new(screen_width: f32) -> Self {
        let center = (screen_width / 2.0).floor();
        let total = Self::BUTTON_WIDTH * 3.0 + Self::BUTTON_GAP * 2.0;
        let start_x = center - (total / 2.0).floor();
        let button = |i: usize| {
            Rect::new(
                start_x + i as f32 * (Self::BUTTON_WIDTH + Self::BUTTON_GAP),
                Self::BUTTON_Y,
                Self::BUTTON_WIDTH,
                Self::BUTTON_HEIGHT,
            )
        };

        Self {
            difficulty_buttons: [
                (Difficulty::Easy, button(0)),
                (Difficulty::Normal, button(1)),
                (Difficulty::Hard, button(2)),
            ],
            start_button: Rect::new(center - 120.0, 240.0, 240.0, 64.0),
            header_buttons: [
                (Difficulty::Easy, Rect::new(20.0, 12.0, 80.0, 28.0)),
                (Difficulty::Normal, Rect::new(110.0, 12.0, 80.0, 28.0)),
                (Difficulty::Hard, Rect::new(200.0, 12.0, 80.0, 28.0)),
            ],
        }
    }

    /// Command for a click on the menu, if it hit anything
    pub fn hit(&self, point: Vec2) -> Option<Command> {
        let find = |buttons: &[(Difficulty, Rect)]| {
            buttons
                .iter()
                .find(|(_, rect)| rect.contains_point(point))
                .map(|&(d, _)| Command::SelectDifficulty(d))
        };

        find(&self.difficulty_buttons)
            .or_else(|| {
                self.start_button
                    .contains_point(point)
                    .then_some(Command::ConfirmStart)
            })
            .or_else(|| find(&self.header_buttons))
    }
}

/// Translate one raw event given the current screen
pub fn translate(event: InputEvent, state: SessionState, layout: &MenuLayout) -> Option<Command> {
    match (state, event) {
        (SessionState::Selecting, InputEvent::KeyDown(Key::Enter)) => Some(Command::ConfirmStart),
        (SessionState::Selecting, InputEvent::PointerDown(pos)) => layout.hit(pos),
        (SessionState::Running, InputEvent::KeyDown(Key::Space | Key::Up))
        | (SessionState::Running, InputEvent::PointerDown(_)) => Some(Command::Jump),
        (SessionState::GameOver, InputEvent::KeyDown(Key::Enter))
        | (SessionState::GameOver, InputEvent::PointerDown(_)) => Some(Command::ConfirmReturn),
        _ => None,
    }
}
