//! Flappy - a Flappy Bird clone for the terminal.
//!
//! This library holds the gameplay, persistence and configuration so they can
//! be tested without a terminal. The binary supplies a ratatui front-end.

pub mod core;
pub mod flappy;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::flappy::{FlappyGame, GameMode};
