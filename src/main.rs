mod ui;

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use flappy::core::clock::FixedRateClock;
use flappy::core::constants::{CONFIG_FILENAME, HIGH_SCORE_FILENAME, LOG_FILENAME};
use flappy::flappy::{run, FlappyGame, HighScoreStore, RunSummary};
use flappy::utils::{build_info, logging, persistence};
use flappy::GameConfig;
use log::{error, info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use ui::terminal::TerminalPresenter;

fn main() -> io::Result<()> {
    let data_dir = persistence::data_dir().unwrap_or_else(|_| PathBuf::from("."));
    logging::init(&data_dir.join(LOG_FILENAME), LevelFilter::Info);
    info!(
        "{} starting, data directory {}",
        build_info::version_line(),
        data_dir.display()
    );

    let config = GameConfig::load_or_default(&data_dir.join(CONFIG_FILENAME));
    let store = HighScoreStore::new(data_dir.join(HIGH_SCORE_FILENAME));
    let mut game = FlappyGame::new(config, store);

    match play_in_terminal(&mut game) {
        Ok(summary) => {
            info!(
                "Exiting after {} frames, {} runs, best {} (record {})",
                summary.frames, summary.runs_finished, summary.best_score, game.high_score
            );
            Ok(())
        }
        Err(e) => {
            error!("Terminal error: {}", e);
            Err(e)
        }
    }
}

/// Take over the terminal, run the game loop, and always give the terminal back.
fn play_in_terminal(game: &mut FlappyGame) -> io::Result<RunSummary> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let result = stdout
        .execute(EnterAlternateScreen)
        .and_then(|out| out.execute(cursor::Hide))
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())))
        .and_then(|terminal| {
            let mut presenter = TerminalPresenter::new(terminal, game.config());
            run(
                game,
                &mut presenter,
                &mut FixedRateClock::new(),
                &mut rand::thread_rng(),
            )
        });

    let restored = restore_terminal();
    let summary = result?;
    restored?;
    Ok(summary)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(cursor::Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}
