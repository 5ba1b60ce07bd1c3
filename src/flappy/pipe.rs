//! Pipe obstacles.
//!
//! A [`PipePair`] is two independent rectangles that share an x coordinate.
//! The top pipe hangs down to the gap; the bottom pipe rises up from it.

use crate::core::config::GameConfig;
use crate::core::geometry::Rect;

/// Which side of the gap an obstacle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Anchored by its bottom edge.
    Top,
    /// Anchored by its top edge.
    Bottom,
}

/// Pipe dimensions and speed, copied out of [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSpec {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
    pub speed: f64,
}

impl PipeSpec {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.pipe_width,
            height: config.pipe_height,
            gap: config.pipe_gap,
            speed: config.pipe_speed,
        }
    }
}

/// A single pipe rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub orientation: Orientation,
}

impl Obstacle {
    /// Build an obstacle whose anchored edge sits at `anchor_y`.
    pub fn new(x: f64, anchor_y: f64, orientation: Orientation, spec: &PipeSpec) -> Self {
        let y = match orientation {
            Orientation::Top => anchor_y - spec.height,
            Orientation::Bottom => anchor_y,
        };
        Self {
            rect: Rect::new(x, y, spec.width, spec.height),
            orientation,
        }
    }

    /// Move left by `speed`.
    pub fn advance(&mut self, speed: f64) {
        self.rect.x -= speed;
    }

    /// True once the right edge has left the viewport.
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0.0
    }
}

/// A top and bottom pipe moving together, plus the scoring flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    pub top: Obstacle,
    pub bottom: Obstacle,
    /// Top edge of the bottom pipe.
    pub gap_y: f64,
    /// Set once the bird has scored this pair.
    pub passed: bool,
    spec: PipeSpec,
}

impl PipePair {
    pub fn new(x: f64, gap_y: f64, spec: PipeSpec) -> Self {
        Self {
            top: Obstacle::new(x, gap_y - spec.gap, Orientation::Top, &spec),
            bottom: Obstacle::new(x, gap_y, Orientation::Bottom, &spec),
            gap_y,
            passed: false,
            spec,
        }
    }

    pub fn x(&self) -> f64 {
        self.bottom.rect.x
    }

    pub fn right(&self) -> f64 {
        self.bottom.rect.right()
    }

    /// Distance between the top pipe's bottom edge and the bottom pipe's top edge.
    pub fn vertical_separation(&self) -> f64 {
        self.bottom.rect.top() - self.top.rect.bottom()
    }

    /// Scroll both pipes left by the configured speed.
    pub fn update(&mut self) {
        self.top.advance(self.spec.speed);
        self.bottom.advance(self.spec.speed);

        debug_assert_eq!(self.top.rect.x, self.bottom.rect.x);
        debug_assert!((self.vertical_separation() - self.spec.gap).abs() < 1e-9);
    }

    /// True once the pair has scrolled fully past the left edge.
    pub fn is_expired(&self) -> bool {
        self.top.is_off_screen() && self.bottom.is_off_screen()
    }

    pub fn obstacles(&self) -> [&Obstacle; 2] {
        [&self.top, &self.bottom]
    }

    /// True if `rect` overlaps either pipe.
    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.obstacles().iter().any(|o| o.rect.intersects(rect))
    }
}
