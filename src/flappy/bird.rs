//! Bird physics.

use crate::core::config::GameConfig;
use crate::core::geometry::Rect;

/// The player-controlled bird. Only `y` and `velocity` change during a run.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Left edge (fixed for the whole run).
    pub x: f64,
    /// Top edge. Kept within `[0, max_y]`.
    pub y: f64,
    /// Vertical velocity per frame (positive = downward).
    pub velocity: f64,
    pub size: f64,

    gravity: f64,
    flap_strength: f64,
    max_y: f64,
}

impl Bird {
    /// A fresh bird centered vertically at the configured column.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_center_x - config.bird_size / 2.0,
            y: config.screen_height / 2.0 - config.bird_size / 2.0,
            velocity: 0.0,
            size: config.bird_size,
            gravity: config.gravity,
            flap_strength: config.flap_strength,
            max_y: config.bird_max_y(),
        }
    }

    /// Apply gravity, move, and clamp to the viewport.
    ///
    /// Velocity is left alone when the bird is clamped, so a bird resting on
    /// the floor keeps accumulating downward speed.
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;

        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y > self.max_y {
            self.y = self.max_y;
        }
        debug_assert!((0.0..=self.max_y).contains(&self.y));
    }

    /// Override the current velocity with the flap impulse.
    pub fn flap(&mut self) {
        self.velocity = self.flap_strength;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }
}
