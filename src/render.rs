use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::geometry::{Grid, Vec2};
use crate::session::Session;

const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const STATUS_COLOR: Color = Color::Blue;
const MENU_COLOR: Color = Color::White;
const BACKGROUND: Color = Color::Black;

/// Terminal columns per grid cell, so cells come out roughly square.
pub const CELL_COLUMNS: u16 = 2;

fn clear(area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(BACKGROUND));
}

fn fill_cell(grid: Grid, pos: Vec2, color: Color, area: Rect, buf: &mut Buffer) {
    let column = (pos.x / grid.cell_size) as u16;
    let row = (pos.y / grid.cell_size) as u16;
    let y = area.y.saturating_add(row);
    if y >= area.bottom() {
        return;
    }

    for dx in 0..CELL_COLUMNS {
        let x = area
            .x
            .saturating_add(column.saturating_mul(CELL_COLUMNS))
            .saturating_add(dx);
        if x < area.right() {
            buf[(x, y)].set_symbol(" ").set_bg(color);
        }
    }
}

fn text_row(area: Rect, y: u16) -> Option<Rect> {
    (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}

impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        clear(area, buf);

        let grid = self.grid();
        for &pos in self.snake().segments() {
            fill_cell(grid, pos, SNAKE_COLOR, area, buf);
        }
        fill_cell(grid, self.food().position(), FOOD_COLOR, area, buf);

        let status = Text::from(vec![
            Line::from(format!("HP: {}", self.snake().health())),
            Line::default(),
            Line::from(format!("EXP: {}", self.snake().experience())),
        ]);
        let status_area = Rect::new(area.x, area.y, status.width() as u16, 3).intersection(area);
        Paragraph::new(status)
            .style(Style::default().fg(STATUS_COLOR))
            .render(status_area, buf);
    }
}

/// Title screen shown between sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuScreen;

impl MenuScreen {
    pub const TITLE: &'static str = "Snake Game";
    pub const START: &'static str = "Press Enter to Start";
    pub const QUIT: &'static str = "Press ESC to Quit";
}

impl Widget for MenuScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        clear(area, buf);

        let rows = [
            (area.y + area.height / 3, Self::TITLE),
            (area.y + area.height / 2, Self::START),
            (area.y + area.height / 2 + 2, Self::QUIT),
        ];
        for (y, text) in rows {
            if let Some(row) = text_row(area, y) {
                Paragraph::new(text)
                    .style(Style::default().fg(MENU_COLOR))
                    .alignment(Alignment::Center)
                    .render(row, buf);
            }
        }
    }
}
