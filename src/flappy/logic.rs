//! Game state machine and main loop.
//!
//! [`FlappyGame::step`] advances exactly one frame: it consumes the input
//! polled for that frame, moves the bird and pipes, spawns, checks
//! collisions and scores, and reports what happened as [`FrameEvent`]s.

use super::bird::Bird;
use super::collision::{detect_collision, score_passes};
use super::high_score::HighScoreStore;
use super::pipe::PipePair;
use super::presentation::{InputEvent, Presenter};
use super::scene::{draw_menu, draw_playing};
use super::spawner::Spawner;
use crate::core::clock::FrameClock;
use crate::core::config::GameConfig;
use log::{debug, info, warn};
use rand::Rng;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
}

/// What happened to the stored record when a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighScoreUpdate {
    /// The run did not beat the record.
    Unchanged,
    /// New record written to disk.
    Saved(u64),
    /// New record kept in memory only.
    WriteFailed { value: u64, reason: String },
}

/// Something observable that happened during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    /// Left the menu.
    Started,
    Flapped,
    PipeSpawned { gap_y: f64 },
    /// A pair was cleared; `score` is the new total.
    PipePassed { score: u64 },
    /// The bird hit a pipe. The run has already been reset.
    Crashed {
        final_score: u64,
        high_score: HighScoreUpdate,
    },
    QuitRequested,
}

/// Totals reported by [`run`] once the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub runs_finished: u32,
    pub best_score: u64,
}

/// The whole game: entities, scores and the Menu/Playing state.
#[derive(Debug)]
pub struct FlappyGame {
    pub mode: GameMode,
    /// Cleared by a quit event; the main loop exits after that frame.
    pub running: bool,
    pub bird: Bird,
    pub pipes: Vec<PipePair>,
    pub spawner: Spawner,
    pub score: u64,
    pub high_score: u64,
    pub frame_count: u64,

    config: GameConfig,
    store: HighScoreStore,
}

impl FlappyGame {
    /// Create a game in the menu, loading the record from `store`.
    ///
    /// An invalid `config` is replaced by the defaults.
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid game config ({}), using defaults", e);
                GameConfig::default()
            }
        };

        let high_score = store.load().value();
        Self {
            mode: GameMode::Menu,
            running: true,
            bird: Bird::new(&config),
            pipes: Vec::new(),
            spawner: Spawner::new(&config),
            score: 0,
            high_score,
            frame_count: 0,
            config,
            store,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &HighScoreStore {
        &self.store
    }

    /// Advance one frame.
    ///
    /// Input is interpreted against the mode the frame started in, so the key
    /// that leaves the menu does not also flap. Physics only runs for frames
    /// that started in `Playing`.
    pub fn step<R: Rng>(&mut self, input: &[InputEvent], rng: &mut R) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        self.frame_count += 1;
        let mode = self.mode;

        for event in input {
            match event {
                InputEvent::Quit => {
                    info!("Quit requested (high score {})", self.high_score);
                    self.running = false;
                    events.push(FrameEvent::QuitRequested);
                    return events;
                }
                InputEvent::KeyDown(key) if key.is_flap() => match mode {
                    GameMode::Menu => {
                        if self.mode == GameMode::Menu {
                            info!("Run started");
                            self.mode = GameMode::Playing;
                            events.push(FrameEvent::Started);
                        }
                    }
                    GameMode::Playing => {
                        self.bird.flap();
                        events.push(FrameEvent::Flapped);
                    }
                },
                InputEvent::KeyDown(_) => {}
            }
        }

        if mode == GameMode::Playing {
            self.advance(rng, &mut events);
        }

        events
    }

    fn advance<R: Rng>(&mut self, rng: &mut R, events: &mut Vec<FrameEvent>) {
        self.bird.update();

        self.pipes.retain_mut(|pair| {
            pair.update();
            !pair.is_expired()
        });

        if let Some(pair) = self.spawner.tick(rng) {
            debug!("Spawned pipe pair with gap at {}", pair.gap_y);
            events.push(FrameEvent::PipeSpawned { gap_y: pair.gap_y });
            self.pipes.push(pair);
        }

        if detect_collision(&self.bird.rect(), &self.pipes) {
            let final_score = self.score;
            let high_score = self.record_run(final_score);
            info!(
                "Run over: score {}, high score {}",
                final_score, self.high_score
            );
            events.push(FrameEvent::Crashed {
                final_score,
                high_score,
            });

            self.reset_run();
            if self.config.return_to_menu_on_crash {
                self.mode = GameMode::Menu;
            }
            return;
        }

        for _ in 0..score_passes(self.bird.x, &mut self.pipes) {
            self.score += 1;
            events.push(FrameEvent::PipePassed { score: self.score });
        }
    }

    /// Compare a finished run with the record, persisting a new record
    /// immediately. A failed write keeps the new record in memory.
    pub fn record_run(&mut self, final_score: u64) -> HighScoreUpdate {
        if final_score <= self.high_score {
            return HighScoreUpdate::Unchanged;
        }

        self.high_score = final_score;
        match self.store.save(final_score) {
            Ok(()) => HighScoreUpdate::Saved(final_score),
            Err(e) => {
                warn!("{}", e);
                HighScoreUpdate::WriteFailed {
                    value: final_score,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Fresh bird, no pipes, score and spawn timer back to zero.
    pub fn reset_run(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.spawner.reset();
        self.score = 0;
    }

    /// Draw the current scene and present it.
    pub fn render<P: Presenter + ?Sized>(&self, presenter: &mut P) -> io::Result<()> {
        match self.mode {
            GameMode::Menu => draw_menu(presenter, &self.config, self.high_score),
            GameMode::Playing => {
                draw_playing(presenter, &self.config, &self.bird, &self.pipes, self.score)
            }
        }
        presenter.present_frame()
    }
}

/// Poll, step, render and pace until a quit event arrives.
pub fn run<P, C, R>(
    game: &mut FlappyGame,
    presenter: &mut P,
    clock: &mut C,
    rng: &mut R,
) -> io::Result<RunSummary>
where
    P: Presenter + ?Sized,
    C: FrameClock + ?Sized,
    R: Rng,
{
    let mut summary = RunSummary::default();

    while game.running {
        let input = presenter.poll_events()?;
        let events = game.step(&input, rng);
        summary.frames += 1;

        for event in &events {
            if let FrameEvent::Crashed { final_score, .. } = event {
                summary.runs_finished += 1;
                summary.best_score = summary.best_score.max(*final_score);
            }
        }
        summary.best_score = summary.best_score.max(game.score);

        if !game.running {
            break;
        }

        game.render(presenter)?;
        clock.tick(game.config().target_fps);
    }

    Ok(summary)
}
