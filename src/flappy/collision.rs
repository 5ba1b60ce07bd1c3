//! Collision detection and pass scoring.

use super::pipe::PipePair;
use crate::core::geometry::Rect;

/// True if the bird overlaps any pipe of any live pair.
pub fn detect_collision(bird: &Rect, pipes: &[PipePair]) -> bool {
    pipes.iter().any(|pair| pair.collides_with(bird))
}

/// Mark every pair whose right edge is strictly left of `bird_left` as passed.
/// Returns how many pairs were newly passed; each pair counts at most once.
pub fn score_passes(bird_left: f64, pipes: &mut [PipePair]) -> u32 {
    let mut passed = 0;
    for pair in pipes.iter_mut().filter(|p| !p.passed) {
        if pair.right() < bird_left {
            pair.passed = true;
            passed += 1;
        }
    }
    passed
}
