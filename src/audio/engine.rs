use std::collections::HashMap;
use std::sync::Arc;

use crate::audio_api::{AudioCommand, SampleId};

use super::frame::StereoFrame;
use super::voice::Voice;

// hard cap so a runaway trigger stream can't grow the voice list forever
const MAX_VOICES: usize = 32;

pub struct Engine {
    samples: HashMap<SampleId, Arc<Vec<f32>>>,
    voices: Vec<Voice>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            samples: HashMap::new(),
            voices: Vec::with_capacity(MAX_VOICES),
        }
    }

    pub fn handle_cmd(&mut self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::RegisterSample { id, buffer } => {
                self.samples.insert(id, buffer);
            }
            AudioCommand::Trigger { id, gain } => self.trigger_voice(id, gain),
        }
    }

    fn trigger_voice(&mut self, id: SampleId, gain: f32) {
        let Some(buffer) = self.samples.get(&id) else {
            // trigger raced ahead of its registration; drop it
            return;
        };
        if self.voices.len() == MAX_VOICES {
            self.voices.remove(0); // steal the oldest
        }
        self.voices.push(Voice::new(buffer.clone(), gain));
    }

    pub fn render_block(&mut self, out: &mut [StereoFrame]) {
        out.fill(StereoFrame::zero());
        for voice in &mut self.voices {
            voice.render_into(out);
        }
        self.voices.retain(|v| v.active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_without_registration_is_silent() {
        let mut engine = Engine::new();
        engine.handle_cmd(AudioCommand::Trigger {
            id: SampleId(99),
            gain: 1.0,
        });
        let mut out = [StereoFrame::zero(); 8];
        engine.render_block(&mut out);
        assert!(out.iter().all(|f| f.left == 0.0 && f.right == 0.0));
    }

    #[test]
    fn overlapping_triggers_sum() {
        let mut engine = Engine::new();
        let id = SampleId(1);
        engine.handle_cmd(AudioCommand::RegisterSample {
            id,
            buffer: Arc::new(vec![0.25; 4]),
        });
        engine.handle_cmd(AudioCommand::Trigger { id, gain: 1.0 });
        engine.handle_cmd(AudioCommand::Trigger { id, gain: 1.0 });

        let mut out = [StereoFrame::zero(); 4];
        engine.render_block(&mut out);
        assert!((out[0].left - 0.5).abs() < 1e-6);

        // both voices finished in that block
        engine.render_block(&mut out);
        assert!(out.iter().all(|f| f.left == 0.0));
    }
}
