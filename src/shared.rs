// Types shared between the session layer, the audio thread boundary, and the TUI.
//
// The pad layout is a 4x4 grid triggered from the keyboard:
//   1 2 3 4 5 6 7 8 9 0 q w e r t y  ->  pads 1..16 in that order
// (case-insensitive; everything else is either a control key or ignored).
//
// The TUI never owns any sequencer state; each frame it asks the session for a
// DisplayState and just draws it.

use std::path::PathBuf;
use std::time::Duration;

pub const NUM_PADS: usize = 16;

/// Everything is mixed and exported at this rate, mono.
pub const SAMPLE_RATE: u32 = 44100;

/// How long a pad stays lit after a press. Cosmetic only; the recorder
/// captures real inter-press time regardless.
pub const PRESS_FLASH: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PadId(pub u8);

impl PadId {
    /// 1-based pad number, used for display and default asset names.
    pub fn number(self) -> u8 {
        self.0 + 1
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    // a grid pad press (live trigger; recorded when armed)
    Pad(PadId),

    // record arm/disarm toggle (b)
    RecordToggle,

    // play the selected sequence (space)
    PlayPress,

    // freeze the current sequence into the store (s)
    SaveSequence,

    // mix down the selected sequence and write a WAV (d)
    Export,

    // cycle the playback/export source between current and saved (j/k)
    SelectNext,
    SelectPrev,

    // bind a custom sound file to a pad (resolved by the tui prompt)
    BindSound { pad: PadId, path: PathBuf },

    // quit button (esc)
    Quit,
}

#[derive(Clone, Debug)]
pub struct DisplayState {
    pub pads_lit: [bool; NUM_PADS],
    pub recording: bool,
    pub playing: bool,
    pub playing_step: Option<usize>, // cursor into the playing sequence
    pub current_len: usize,
    pub saved_ids: Vec<String>,
    pub selected: Option<usize>, // None = the current sequence
    pub status: String,
}
