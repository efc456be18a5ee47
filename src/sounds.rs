use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::audio::decode;
use crate::audio_api::{AudioCommand, SampleId, next_sample_id};
use crate::shared::{NUM_PADS, PadId, SAMPLE_RATE};

#[derive(Clone, Debug)]
pub struct LoadedSound {
    pub id: SampleId,
    pub samples: Arc<Vec<f32>>,
}

// Resolves a pad to its sound and owns the decoded-PCM cache. A pad resolves
// to its user binding if one exists, otherwise to the default asset
// `<sounds_dir>/sound{n}.mp3` (1-indexed). Only the single UI thread touches
// this, so a bind is a plain map insert and every later resolve sees it whole.
//
// Decoding happens here, off the audio callback; newly decoded buffers queue a
// RegisterSample command that the session forwards to the engine before any
// trigger can reference the id.
pub struct SoundBank {
    sounds_dir: PathBuf,
    bindings: HashMap<PadId, PathBuf>,
    // None caches a failed decode so we warn once, not on every press
    cache: HashMap<PathBuf, Option<LoadedSound>>,
    pending: Vec<AudioCommand>,
}

impl SoundBank {
    pub fn new(sounds_dir: PathBuf) -> Self {
        Self {
            sounds_dir,
            bindings: HashMap::new(),
            cache: HashMap::new(),
            pending: Vec::new(),
        }
    }

    pub fn resolve(&self, pad: PadId) -> PathBuf {
        match self.bindings.get(&pad) {
            Some(path) => path.clone(),
            None => self.sounds_dir.join(format!("sound{}.mp3", pad.number())),
        }
    }

    /// Bind a custom sound file to a pad, replacing any previous binding.
    pub fn bind(&mut self, pad: PadId, path: PathBuf) {
        self.bindings.insert(pad, path);
    }

    /// Decode (once) and return the sound for a pad. Fetch/decode failures are
    /// warned and swallowed; the pad simply stays silent.
    pub fn load(&mut self, pad: PadId) -> Option<LoadedSound> {
        let path = self.resolve(pad);
        if !self.cache.contains_key(&path) {
            let entry = match decode::decode_file(&path, SAMPLE_RATE) {
                Ok(samples) => {
                    let sound = LoadedSound {
                        id: next_sample_id(),
                        samples: Arc::new(samples),
                    };
                    self.pending.push(AudioCommand::RegisterSample {
                        id: sound.id,
                        buffer: sound.samples.clone(),
                    });
                    Some(sound)
                }
                Err(e) => {
                    eprintln!("padboard: skipping {}: {e:#}", path.display());
                    None
                }
            };
            self.cache.insert(path.clone(), entry);
        }
        self.cache.get(&path).and_then(|e| e.clone())
    }

    /// Engine registrations queued by `load`, to be sent before any trigger.
    pub fn take_registrations(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Decode the default asset for every pad up front. Missing assets warn
    /// and are skipped. Returns how many loaded.
    pub fn preload_defaults(&mut self) -> usize {
        (0..NUM_PADS as u8)
            .filter(|&i| self.load(PadId(i)).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_pad_resolves_to_indexed_default() {
        let bank = SoundBank::new(PathBuf::from("/assets"));
        assert_eq!(bank.resolve(PadId(0)), PathBuf::from("/assets/sound1.mp3"));
        assert_eq!(bank.resolve(PadId(15)), PathBuf::from("/assets/sound16.mp3"));
    }

    #[test]
    fn binding_overrides_and_rebinding_overwrites() {
        let mut bank = SoundBank::new(PathBuf::from("/assets"));
        bank.bind(PadId(3), PathBuf::from("/tmp/a.wav"));
        assert_eq!(bank.resolve(PadId(3)), PathBuf::from("/tmp/a.wav"));

        bank.bind(PadId(3), PathBuf::from("/tmp/b.wav"));
        assert_eq!(bank.resolve(PadId(3)), PathBuf::from("/tmp/b.wav"));

        // other pads untouched
        assert_eq!(bank.resolve(PadId(4)), PathBuf::from("/assets/sound5.mp3"));
    }

    #[test]
    fn failed_load_is_cached_and_queues_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut bank = SoundBank::new(dir.path().to_path_buf());
        assert!(bank.load(PadId(0)).is_none());
        assert!(bank.load(PadId(0)).is_none());
        assert!(bank.take_registrations().is_empty());
    }

    #[test]
    fn load_registers_once_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let wav = dir.path().join("clip.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&wav, spec).unwrap();
        writer.write_sample(12000i16).unwrap();
        writer.finalize().unwrap();

        let mut bank = SoundBank::new(dir.path().to_path_buf());
        bank.bind(PadId(2), wav.clone());

        let first = bank.load(PadId(2)).unwrap();
        let again = bank.load(PadId(2)).unwrap();
        assert_eq!(first.id, again.id);
        assert_eq!(bank.take_registrations().len(), 1);
        assert!(bank.take_registrations().is_empty());
    }
}
