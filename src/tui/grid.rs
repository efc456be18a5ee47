use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::shared::NUM_PADS;

const COLS: usize = 4;
const ROWS: usize = 4;

const PAD_LABELS: [&str; NUM_PADS] = [
    "1", "2", "3", "4",
    "5", "6", "7", "8",
    "9", "0", "Q", "W",
    "E", "R", "T", "Y",
];

pub fn draw_pad_grid(frame: &mut Frame, area: Rect, pads_lit: &[bool; NUM_PADS]) {
    let row_constraints = [Constraint::Percentage(25); ROWS];
    let col_constraints = [Constraint::Percentage(25); COLS];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        for (col_idx, cell_area) in cols.iter().enumerate() {
            let pad_idx = row_idx * COLS + col_idx;
            let style = if pads_lit[pad_idx] {
                Style::default().fg(Color::Black).bg(Color::LightMagenta)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let cell = Paragraph::new(PAD_LABELS[pad_idx])
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            frame.render_widget(cell, *cell_area);
        }
    }
}
