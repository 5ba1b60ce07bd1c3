//! Game configuration.
//!
//! A single immutable [`GameConfig`] is built at startup and handed to
//! `FlappyGame::new`. Each component copies the values it needs when it is
//! constructed, so tests can run the game with non-default tuning.

use super::constants::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// Errors produced while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("gap range is empty: {min}..={max}")]
    EmptyGapRange { min: i32, max: i32 },

    #[error("target frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("bird does not fit inside the viewport")]
    BirdOutsideViewport,
}

/// Tuning values for one game session.
///
/// Missing fields in a config file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    pub bird_size: f64,
    /// Horizontal center of the bird. The bird never moves horizontally.
    pub bird_center_x: f64,
    /// Velocity added every frame (positive = downward).
    pub gravity: f64,
    /// Velocity assigned on flap (negative = upward).
    pub flap_strength: f64,

    pub pipe_width: f64,
    pub pipe_height: f64,
    /// Vertical distance between the top and bottom pipe of a pair.
    pub pipe_gap: f64,
    /// Horizontal distance a pipe travels each frame.
    pub pipe_speed: f64,

    /// A pair spawns when the frame counter exceeds this value.
    pub spawn_interval_frames: u32,
    pub gap_y_min: i32,
    /// The largest gap anchor is `screen_height - gap_y_bottom_margin`.
    pub gap_y_bottom_margin: i32,

    pub target_fps: u32,

    /// Go back to the menu after a crash instead of restarting immediately.
    pub return_to_menu_on_crash: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_size: BIRD_SIZE,
            bird_center_x: BIRD_CENTER_X,
            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_interval_frames: SPAWN_INTERVAL_FRAMES,
            gap_y_min: GAP_Y_MIN,
            gap_y_bottom_margin: GAP_Y_BOTTOM_MARGIN,
            target_fps: TARGET_FPS,
            return_to_menu_on_crash: false,
        }
    }
}

impl GameConfig {
    /// Inclusive range the spawner draws gap anchors from.
    pub fn gap_y_range(&self) -> RangeInclusive<i32> {
        let max = self.screen_height as i32 - self.gap_y_bottom_margin;
        self.gap_y_min..=max
    }

    /// Largest top coordinate the bird may occupy.
    pub fn bird_max_y(&self) -> f64 {
        self.screen_height - self.bird_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_size", self.bird_size),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        if self.bird_size > self.screen_height
            || self.bird_center_x - self.bird_size / 2.0 < 0.0
            || self.bird_center_x + self.bird_size / 2.0 > self.screen_width
        {
            return Err(ConfigError::BirdOutsideViewport);
        }

        let range = self.gap_y_range();
        if range.is_empty() {
            return Err(ConfigError::EmptyGapRange {
                min: *range.start(),
                max: *range.end(),
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when the file is
    /// missing, unreadable or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
