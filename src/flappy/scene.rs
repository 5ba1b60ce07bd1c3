//! Menu and gameplay scenes, drawn through a [`Presenter`].

use super::bird::Bird;
use super::pipe::PipePair;
use super::presentation::{Presenter, TextSize, TextStyle};
use crate::core::config::GameConfig;
use crate::core::constants::*;
use crate::core::geometry::Rect;

fn viewport(config: &GameConfig) -> Rect {
    Rect::new(0.0, 0.0, config.screen_width, config.screen_height)
}

/// Start prompt and the current record.
pub fn draw_menu<P: Presenter + ?Sized>(presenter: &mut P, config: &GameConfig, high_score: u64) {
    let center_y = (config.screen_height / 2.0).floor();

    presenter.draw_rect(viewport(config), MENU_BACKGROUND);
    presenter.draw_text(
        MENU_PROMPT,
        MENU_TEXT_X,
        center_y + MENU_PROMPT_OFFSET_Y,
        TextStyle {
            color: MENU_TEXT_COLOR,
            size: TextSize::Menu,
        },
    );
    presenter.draw_text(
        &record_label(high_score),
        MENU_TEXT_X,
        center_y + MENU_RECORD_OFFSET_Y,
        TextStyle {
            color: MENU_TEXT_COLOR,
            size: TextSize::Game,
        },
    );
}

/// Background, bird, pipes and the live score.
pub fn draw_playing<P: Presenter + ?Sized>(
    presenter: &mut P,
    config: &GameConfig,
    bird: &Bird,
    pipes: &[PipePair],
    score: u64,
) {
    presenter.draw_rect(viewport(config), PLAY_BACKGROUND);
    presenter.draw_rect(bird.rect(), BIRD_COLOR);
    for pair in pipes {
        for obstacle in pair.obstacles() {
            presenter.draw_rect(obstacle.rect, PIPE_COLOR);
        }
    }
    presenter.draw_text(
        &score.to_string(),
        (config.screen_width / 2.0).floor(),
        SCORE_TEXT_Y,
        TextStyle {
            color: SCORE_TEXT_COLOR,
            size: TextSize::Game,
        },
    );
}

pub fn record_label(high_score: u64) -> String {
    format!("Record: {}", high_score)
}
