//! Rasterizes world-space draw calls into terminal cells.
//!
//! Each cell covers `world_width / cols` by `world_height / rows` world units.
//! A rectangle fills every cell whose center it covers. Rectangles smaller
//! than a cell still occupy the one cell under their center.

use flappy::core::geometry::{Rect, Rgb};
use flappy::flappy::presentation::{TextSize, TextStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// A draw call recorded during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Rgb,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: Style,
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Half-open range of cell indices whose centers lie in `[start, end)`.
fn cell_span(start: f64, end: f64, cell_size: f64, count: u16) -> (usize, usize) {
    let count = count as f64;
    let first = (start / cell_size - 0.5).ceil().clamp(0.0, count);
    let last = (end / cell_size - 0.5).ceil().clamp(0.0, count);
    if first < last {
        return (first as usize, last as usize);
    }

    // Too thin to cover a center: use the cell under the midpoint if visible
    let mid = ((start + end) / 2.0 / cell_size).floor();
    if mid >= 0.0 && mid < count {
        (mid as usize, mid as usize + 1)
    } else {
        (0, 0)
    }
}

/// Turn a frame's draw commands into one [`Line`] per terminal row.
pub fn rasterize(
    commands: &[DrawCommand],
    world_width: f64,
    world_height: f64,
    cols: u16,
    rows: u16,
) -> Vec<Line<'static>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let cell_w = world_width / cols as f64;
    let cell_h = world_height / rows as f64;
    let width = cols as usize;

    let blank = Cell {
        ch: ' ',
        style: Style::default(),
    };
    let mut grid = vec![blank; width * rows as usize];

    for command in commands {
        match command {
            DrawCommand::Rect { rect, color } => {
                let (c0, c1) = cell_span(rect.left(), rect.right(), cell_w, cols);
                let (r0, r1) = cell_span(rect.top(), rect.bottom(), cell_h, rows);
                for row in r0..r1 {
                    for col in c0..c1 {
                        grid[row * width + col] = Cell {
                            ch: ' ',
                            style: Style::default().bg(to_color(*color)),
                        };
                    }
                }
            }
            DrawCommand::Text { text, x, y, style } => {
                let row = (y / cell_h).floor();
                let col = (x / cell_w).round();
                if row < 0.0 || row >= rows as f64 || col >= cols as f64 {
                    continue;
                }
                let row = row as usize;
                let start = col.max(0.0) as usize;

                for (offset, ch) in text.chars().enumerate() {
                    let col = start + offset;
                    if col >= width {
                        break;
                    }
                    let cell = &mut grid[row * width + col];
                    let mut text_style = cell.style.fg(to_color(style.color));
                    if style.size == TextSize::Menu {
                        text_style = text_style.add_modifier(Modifier::BOLD);
                    }
                    *cell = Cell {
                        ch,
                        style: text_style,
                    };
                }
            }
        }
    }

    grid.chunks(width)
        .map(|row| {
            // Merge runs of identically styled cells into one span
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_style = row[0].style;
            for cell in row {
                if cell.style != run_style {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    run_style = cell.style;
                }
                run.push(cell.ch);
            }
            spans.push(Span::styled(run, run_style));
            Line::from(spans)
        })
        .collect()
}
