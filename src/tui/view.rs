use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::shared::DisplayState;

use super::grid;

pub fn render(frame: &mut Frame, area: Rect, state: &DisplayState, prompt: Option<String>) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // status panel
            Constraint::Min(12),    // pad grid
            Constraint::Length(1),  // key help
        ])
        .split(area);

    draw_status(frame, sections[0], state, prompt);
    grid::draw_pad_grid(frame, sections[1], &state.pads_lit);
    draw_help(frame, sections[2]);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &DisplayState, prompt: Option<String>) {
    let mode = if state.recording {
        ("REC".to_string(), Color::Red)
    } else if state.playing {
        let step = state
            .playing_step
            .map(|s| format!(" step {s}"))
            .unwrap_or_default();
        (format!("PLAY{step}"), Color::Green)
    } else {
        ("IDLE".to_string(), Color::DarkGray)
    };

    let selection = match state.selected {
        Some(i) => state
            .saved_ids
            .get(i)
            .cloned()
            .unwrap_or_else(|| "?".to_string()),
        None => format!("current ({} presses)", state.current_len),
    };

    let mut lines = vec![
        Line::styled(format!(" {} ", mode.0), Style::default().fg(mode.1)),
        Line::raw(format!("source: {selection}")),
        Line::raw(format!("saved:  {}", summarize(&state.saved_ids))),
        Line::raw(state.status.clone()),
    ];
    if let Some(p) = prompt {
        lines.push(Line::styled(p, Style::default().fg(Color::Yellow)));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("padboard"));
    frame.render_widget(panel, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "pads 1-0 qwerty | b rec | space play | s save | j/k select | d export | m bind | esc quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

fn summarize(ids: &[String]) -> String {
    if ids.is_empty() {
        return "(none)".to_string();
    }
    // keep the panel to one line: count plus the newest few ids
    let shown: Vec<&str> = ids.iter().rev().take(3).map(String::as_str).collect();
    format!("{} [{}]", ids.len(), shown.join(", "))
}
