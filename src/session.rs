// The session layer: one explicit state machine instead of a pile of flags.
// Recording and playing are mutually exclusive; the current sequence lives
// outside the mode so stopping a recording keeps it around for save,
// playback, or export. The TUI feeds InputEvents in and renders the
// DisplayState that comes back out; audio commands are drained by the main
// loop and pushed over the channel to the engine.

use std::path::PathBuf;
use std::time::Instant;

use crate::audio_api::AudioCommand;
use crate::config::Config;
use crate::export;
use crate::seq::{Player, Recorder, Sequence, SequenceStore};
use crate::shared::{DisplayState, InputEvent, NUM_PADS, PRESS_FLASH, PadId};
use crate::sounds::SoundBank;

const TRIGGER_GAIN: f32 = 0.8;

enum Mode {
    Idle,
    Recording(Recorder),
    Playing(Player),
}

pub struct Session {
    mode: Mode,
    current: Sequence,
    store: SequenceStore,
    sounds: SoundBank,
    lit_until: [Option<Instant>; NUM_PADS],
    status: String,
    export_dir: PathBuf,
    out: Vec<AudioCommand>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            mode: Mode::Idle,
            current: Sequence::new(),
            store: SequenceStore::new(),
            sounds: SoundBank::new(config.sounds_dir),
            lit_until: [None; NUM_PADS],
            status: String::new(),
            export_dir: config.export_dir,
            out: Vec::new(),
        }
    }

    /// Decode the 16 default assets up front so the first press is instant.
    pub fn preload_defaults(&mut self) {
        let loaded = self.sounds.preload_defaults();
        self.out.extend(self.sounds.take_registrations());
        self.status = format!("{loaded}/{NUM_PADS} default sounds loaded");
    }

    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Pad(pad) => self.press_pad(pad, now),
            InputEvent::RecordToggle => self.toggle_recording(),
            InputEvent::PlayPress => self.start_playback(now),
            InputEvent::SaveSequence => self.save_current(),
            InputEvent::Export => self.export_selected(),
            InputEvent::SelectNext => {
                self.store.select_next();
                self.status = format!("selected: {}", self.store.selected_label());
            }
            InputEvent::SelectPrev => {
                self.store.select_prev();
                self.status = format!("selected: {}", self.store.selected_label());
            }
            InputEvent::BindSound { pad, path } => {
                self.status = format!("pad {} -> {}", pad.number(), path.display());
                self.sounds.bind(pad, path);
            }
            InputEvent::Quit => {}
        }
    }

    /// Advance pad lights and any in-flight playback.
    pub fn tick(&mut self, now: Instant) {
        for deadline in self.lit_until.iter_mut() {
            if deadline.is_some_and(|d| d <= now) {
                *deadline = None;
            }
        }

        let mut fired = Vec::new();
        let mut done = false;
        if let Mode::Playing(player) = &mut self.mode {
            fired = player.tick(now);
            done = player.finished();
        }
        for pad in fired {
            self.trigger_pad(pad, now);
        }
        if done {
            self.mode = Mode::Idle;
        }
    }

    /// Commands queued for the audio thread since the last drain.
    pub fn drain_commands(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.out)
    }

    pub fn display_state(&self, now: Instant) -> DisplayState {
        let mut pads_lit = [false; NUM_PADS];
        for (lit, deadline) in pads_lit.iter_mut().zip(self.lit_until.iter()) {
            *lit = deadline.is_some_and(|d| d > now);
        }
        DisplayState {
            pads_lit,
            recording: matches!(self.mode, Mode::Recording(_)),
            playing: matches!(self.mode, Mode::Playing(_)),
            playing_step: match &self.mode {
                Mode::Playing(player) => Some(player.cursor()),
                _ => None,
            },
            current_len: self.current.len(),
            saved_ids: self.store.ids(),
            selected: self.store.selected_index(),
            status: self.status.clone(),
        }
    }

    // ── input handling ────────────────────────────────────────────

    fn press_pad(&mut self, pad: PadId, now: Instant) {
        // live pads are disabled while a playback drives them
        if matches!(self.mode, Mode::Playing(_)) {
            return;
        }
        if let Mode::Recording(recorder) = &mut self.mode {
            recorder.record(&mut self.current, pad, now);
        }
        self.trigger_pad(pad, now);
    }

    fn toggle_recording(&mut self) {
        match &self.mode {
            Mode::Playing(_) => {
                self.status = "can't record during playback".to_string();
            }
            Mode::Recording(_) => {
                // disarm; the take stays around for save/play/export
                self.mode = Mode::Idle;
                self.status = format!("recorded {} presses", self.current.len());
            }
            Mode::Idle => {
                self.current.clear();
                self.mode = Mode::Recording(Recorder::new());
                self.status = "recording...".to_string();
            }
        }
    }

    fn start_playback(&mut self, now: Instant) {
        match self.mode {
            Mode::Playing(_) => {
                self.status = "already playing".to_string();
                return;
            }
            Mode::Recording(_) => {
                self.status = "stop recording first".to_string();
                return;
            }
            Mode::Idle => {}
        }
        let actions = match self.store.selected() {
            Some(saved) => saved.actions.clone(),
            None => self.current.clone(),
        };
        match Player::start(actions, now) {
            Some(player) => {
                self.status = format!("playing {}", self.store.selected_label());
                self.mode = Mode::Playing(player);
            }
            None => self.status = "nothing to play".to_string(),
        }
    }

    fn save_current(&mut self) {
        match self.store.save(&self.current) {
            Some(id) => {
                self.current.clear();
                self.status = format!("saved {id}");
            }
            None => self.status = "nothing to save".to_string(),
        }
    }

    fn export_selected(&mut self) {
        let (source_id, actions) = match self.store.selected() {
            Some(saved) => (Some(saved.id.clone()), saved.actions.clone()),
            None => (None, self.current.clone()),
        };
        let sounds = &mut self.sounds;
        let result = export::export_to(
            &self.export_dir,
            source_id.as_deref(),
            &actions,
            |pad| sounds.load(pad).map(|s| s.samples),
        );
        // exports can pull in clips the live path never touched
        self.out.extend(self.sounds.take_registrations());
        match result {
            Ok(Some(path)) => self.status = format!("exported {}", path.display()),
            Ok(None) => self.status = "nothing to export".to_string(),
            Err(e) => self.status = format!("export failed: {e:#}"),
        }
    }

    // ── trigger path (shared by live presses and playback) ────────

    fn trigger_pad(&mut self, pad: PadId, now: Instant) {
        self.lit_until[pad.index()] = Some(now + PRESS_FLASH);
        let id = self.sounds.load(pad).map(|s| s.id);
        // registration has to reach the engine before the trigger
        self.out.extend(self.sounds.take_registrations());
        if let Some(id) = id {
            self.out.push(AudioCommand::Trigger {
                id,
                gain: TRIGGER_GAIN,
            });
        }
    }

    #[cfg(test)]
    fn current(&self) -> &Sequence {
        &self.current
    }
}
