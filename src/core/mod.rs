//! Core types shared by every part of the game: tuning constants,
//! geometry, configuration and frame pacing.

pub mod clock;
pub mod config;
pub mod constants;
pub mod geometry;

pub use clock::{FixedRateClock, FrameClock};
pub use config::{ConfigError, GameConfig};
pub use geometry::{Rect, Rgb};
