//! Timer-driven pipe spawning.

use super::pipe::{PipePair, PipeSpec};
use crate::core::config::GameConfig;
use rand::Rng;
use std::ops::RangeInclusive;

/// Emits a new [`PipePair`] at the right edge every `interval + 1` frames.
#[derive(Debug, Clone)]
pub struct Spawner {
    timer: u32,
    interval: u32,
    spawn_x: f64,
    gap_range: RangeInclusive<i32>,
    spec: PipeSpec,
}

impl Spawner {
    /// `config` must pass [`GameConfig::validate`]: an empty gap range
    /// panics on the first spawn.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            timer: 0,
            interval: config.spawn_interval_frames,
            spawn_x: config.screen_width,
            gap_range: config.gap_y_range(),
            spec: PipeSpec::from_config(config),
        }
    }

    /// Frames counted since the last spawn.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }

    /// Advance the frame counter. Once it exceeds the interval the counter
    /// restarts and a pair with a uniformly random gap anchor is returned.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<PipePair> {
        self.timer += 1;
        if self.timer <= self.interval {
            return None;
        }

        self.timer = 0;
        let gap_y = rng.gen_range(self.gap_range.clone());
        Some(PipePair::new(self.spawn_x, f64::from(gap_y), self.spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_no_spawn_before_threshold() {
        let mut spawner = Spawner::new(&GameConfig::default());
        let mut rng = rng();
        for frame in 1..=90 {
            assert!(spawner.tick(&mut rng).is_none());
            assert_eq!(spawner.timer(), frame);
        }
    }

    #[test]
    fn test_spawn_on_frame_91() {
        let config = GameConfig::default();
        let mut spawner = Spawner::new(&config);
        let mut rng = rng();
        for _ in 0..90 {
            spawner.tick(&mut rng);
        }

        let pair = spawner.tick(&mut rng).expect("pair should spawn");
        assert_eq!(spawner.timer(), 0);
        assert_eq!(pair.x(), 1280.0);
        assert!(pair.gap_y >= 100.0 && pair.gap_y <= 420.0);
        assert_eq!(pair.gap_y.fract(), 0.0);
        assert_eq!(pair.vertical_separation(), 200.0);
        assert!(!pair.passed);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut spawner = Spawner::new(&GameConfig::default());
        let mut rng = rng();
        let spawned = (0..91 * 5).filter(|_| spawner.tick(&mut rng).is_some()).count();
        assert_eq!(spawned, 5);
    }

    #[test]
    fn test_gap_stays_in_range() {
        let mut spawner = Spawner::new(&GameConfig::default());
        let mut rng = rng();
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..91 * 400 {
            if let Some(pair) = spawner.tick(&mut rng) {
                assert!((100.0..=420.0).contains(&pair.gap_y));
                seen_low |= pair.gap_y < 200.0;
                seen_high |= pair.gap_y > 320.0;
            }
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_reset_restarts_counter() {
        let mut spawner = Spawner::new(&GameConfig::default());
        let mut rng = rng();
        for _ in 0..50 {
            spawner.tick(&mut rng);
        }
        spawner.reset();
        assert_eq!(spawner.timer(), 0);
    }

    #[test]
    fn test_custom_interval() {
        let config = GameConfig {
            spawn_interval_frames: 2,
            ..Default::default()
        };
        let mut spawner = Spawner::new(&config);
        let mut rng = rng();
        assert!(spawner.tick(&mut rng).is_none());
        assert!(spawner.tick(&mut rng).is_none());
        assert!(spawner.tick(&mut rng).is_some());
    }
}
