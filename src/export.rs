// Offline mixdown of a sequence into one mono buffer, serialized as a
// canonical 16-bit PCM WAV (44-byte header, little-endian samples).
//
// The render buffer is a fixed 60 seconds; anything a sequence places past
// the ceiling is silently truncated. That matches the product's historical
// behavior and is deliberately preserved rather than fixed here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::seq::Sequence;
use crate::shared::{PadId, SAMPLE_RATE};

const RENDER_SECONDS: usize = 60;

/// Walk the sequence in order, advancing a running placement time by each
/// action's delay, and sum the resolved clip into the mix at that offset.
/// Overlapping clips add; a clip that fails to resolve is skipped.
pub fn render_mix<F>(actions: &Sequence, mut clip_for: F) -> Vec<f32>
where
    F: FnMut(PadId) -> Option<Arc<Vec<f32>>>,
{
    let mut mix = vec![0.0f32; RENDER_SECONDS * SAMPLE_RATE as usize];
    let mut placement = 0.0f64; // seconds from the start of the mix
    for action in actions {
        placement += action.delay.as_secs_f64();
        let Some(clip) = clip_for(action.pad) else {
            continue;
        };
        let start = (placement * SAMPLE_RATE as f64) as usize;
        if start >= mix.len() {
            continue; // entirely past the render ceiling
        }
        for (i, &s) in clip.iter().enumerate() {
            match mix.get_mut(start + i) {
                Some(slot) => *slot += s,
                None => break, // past the render ceiling
            }
        }
    }
    mix
}

// Summed clips can exceed full scale; clamp before quantizing. Positive
// full scale maps to 0x7FFF, negative to -0x8000.
fn quantize(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s >= 0.0 {
        (s * 0x7FFF as f32) as i16
    } else {
        (s * 0x8000 as f32) as i16
    }
}

/// Serialize mono samples as a complete WAV byte stream.
pub fn wav_bytes(samples: &[f32]) -> anyhow::Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for &s in samples {
            writer.write_sample(quantize(s))?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Mix a sequence down and write it under `dir`. The file name reflects the
/// export source: `padboard-current.wav` or `padboard-<id>.wav`. An empty
/// sequence writes nothing and returns `None`.
pub fn export_to<F>(
    dir: &Path,
    source_id: Option<&str>,
    actions: &Sequence,
    clip_for: F,
) -> anyhow::Result<Option<PathBuf>>
where
    F: FnMut(PadId) -> Option<Arc<Vec<f32>>>,
{
    if actions.is_empty() {
        return Ok(None);
    }
    let mix = render_mix(actions, clip_for);
    let bytes = wav_bytes(&mix)?;

    let name = match source_id {
        Some(id) => format!("padboard-{id}.wav"),
        None => "padboard-current.wav".to_string(),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(name);
    std::fs::write(&path, bytes)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(Some(path))
}
