//! Flappy Bird gameplay.
//!
//! The bird falls under gravity and flaps upward on input while pipe pairs
//! scroll in from the right. Clearing a pair scores a point, hitting one
//! ends the run, and the best score is kept on disk between sessions.

pub mod bird;
pub mod collision;
pub mod high_score;
pub mod logic;
pub mod pipe;
pub mod presentation;
pub mod scene;
pub mod spawner;

pub use bird::Bird;
pub use high_score::{HighScoreError, HighScoreLoad, HighScoreStore};
pub use logic::{run, FlappyGame, FrameEvent, GameMode, HighScoreUpdate, RunSummary};
pub use pipe::{Obstacle, Orientation, PipePair, PipeSpec};
pub use presentation::{InputEvent, Key, Presenter, TextSize, TextStyle};
pub use spawner::Spawner;
