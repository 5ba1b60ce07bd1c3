//! Terminal presenter built on ratatui and crossterm.

use super::raster::{rasterize, DrawCommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flappy::core::geometry::{Rect, Rgb};
use flappy::flappy::presentation::{InputEvent, Key, Presenter, TextStyle};
use flappy::GameConfig;
use ratatui::backend::Backend;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io;
use std::time::Duration;

/// Translate a crossterm key press into a game input.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,
        KeyCode::Char(' ') => InputEvent::KeyDown(Key::Space),
        KeyCode::Enter => InputEvent::KeyDown(Key::Enter),
        KeyCode::Up => InputEvent::KeyDown(Key::Up),
        KeyCode::Char(c) => InputEvent::KeyDown(Key::Char(c)),
        _ => InputEvent::KeyDown(Key::Other),
    };
    Some(event)
}

/// Collects draw calls for a frame and renders them scaled to the terminal.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    commands: Vec<DrawCommand>,
    world_width: f64,
    world_height: f64,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>, config: &GameConfig) -> Self {
        Self {
            terminal,
            commands: Vec::new(),
            world_width: config.screen_width,
            world_height: config.screen_height,
        }
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                events.extend(map_key_event(key));
            }
        }
        Ok(events)
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }

    fn present_frame(&mut self) -> io::Result<()> {
        let commands = std::mem::take(&mut self.commands);
        let (world_width, world_height) = (self.world_width, self.world_height);

        self.terminal.draw(|frame| {
            let area = frame.size();
            let lines = rasterize(&commands, world_width, world_height, area.width, area.height);
            frame.render_widget(Paragraph::new(lines), area);
        })?;
        Ok(())
    }
}
