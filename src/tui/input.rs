use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::shared::{InputEvent, NUM_PADS, PadId};

use super::mode::TuiState;

// the pad keys, in pad order (1..16)
const PAD_KEYS: [char; NUM_PADS] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'q', 'w', 'e', 'r', 't', 'y',
];

// poll for input from the terminal; resolves keys (and the bind prompt held
// in TuiState) into input events for the session to handle
pub fn poll_input(timeout: Duration, ts: &mut TuiState) -> anyhow::Result<Vec<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(vec![]);
    }

    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(vec![]);
        }
        return Ok(handle_key(key.code, ts));
    }
    Ok(vec![])
}

fn handle_key(code: KeyCode, ts: &mut TuiState) -> Vec<InputEvent> {
    // while the bind prompt is open, keys are text
    if let Some(buf) = &mut ts.prompt {
        match code {
            KeyCode::Esc => ts.prompt = None,
            KeyCode::Enter => {
                let path = buf.trim().to_string();
                ts.prompt = None;
                if !path.is_empty() {
                    ts.pending_bind = Some(PathBuf::from(path));
                }
            }
            KeyCode::Backspace => {
                buf.pop();
            }
            KeyCode::Char(c) => buf.push(c),
            _ => {}
        }
        return vec![];
    }

    match code {
        KeyCode::Esc => {
            if ts.pending_bind.take().is_some() {
                return vec![]; // cancel the bind instead of quitting
            }
            vec![InputEvent::Quit]
        }
        KeyCode::Char(' ') => vec![InputEvent::PlayPress],
        KeyCode::Char(c) => {
            if let Some(pad) = char_to_pad(c) {
                if let Some(path) = ts.pending_bind.take() {
                    return vec![InputEvent::BindSound { pad, path }];
                }
                return vec![InputEvent::Pad(pad)];
            }
            match c.to_ascii_lowercase() {
                'b' => vec![InputEvent::RecordToggle],
                's' => vec![InputEvent::SaveSequence],
                'd' => vec![InputEvent::Export],
                'j' => vec![InputEvent::SelectNext],
                'k' => vec![InputEvent::SelectPrev],
                'm' => {
                    ts.prompt = Some(String::new());
                    vec![]
                }
                _ => vec![],
            }
        }
        _ => vec![],
    }
}

// convert char to pad, case-insensitive; unmapped keys are ignored upstream
fn char_to_pad(c: char) -> Option<PadId> {
    let lower = c.to_ascii_lowercase();
    PAD_KEYS
        .iter()
        .position(|&k| k == lower)
        .map(|i| PadId(i as u8))
}
