//! Contract between the game and whatever draws it.
//!
//! The game never touches a terminal, window or input device. It polls
//! [`InputEvent`]s and issues draw calls in world coordinates through a
//! [`Presenter`].

use crate::core::geometry::{Rect, Rgb};
use std::io;

/// Keys the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Up,
    Char(char),
    Other,
}

impl Key {
    /// Keys that start a run from the menu and flap while playing.
    pub fn is_flap(self) -> bool {
        matches!(self, Key::Space | Key::Enter | Key::Up)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

/// Text sizes used by the two scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Menu,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Rgb,
    pub size: TextSize,
}

/// Drawing surface and input source.
pub trait Presenter {
    /// All input received since the previous poll. Never blocks.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;

    /// Fill `rect` (world coordinates) with `color`.
    fn draw_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw `text` with its top-left corner at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);

    /// Show everything drawn since the previous call.
    fn present_frame(&mut self) -> io::Result<()>;
}
