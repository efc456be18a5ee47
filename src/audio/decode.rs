use std::fs::File;
use std::path::Path;

use anyhow::Context;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

// Decode an audio file (mp3, wav, ...) into mono f32 at `target_rate`.
// Multi-channel sources are averaged down; off-rate sources get a linear
// resample, which is plenty for short soundboard clips.
pub fn decode_file(path: &Path, target_rate: u32) -> anyhow::Result<Vec<f32>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .with_context(|| format!("probe {}", path.display()))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("no audio track")?;
    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("unsupported codec")?;

    let mut mono: Vec<f32> = Vec::new();
    let mut source_rate = track.codec_params.sample_rate.unwrap_or(target_rate);

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(e).context("read packet"),
        };
        if packet.track_id() != track_id {
            continue;
        }
        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            // a corrupt packet is recoverable; keep going
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(e).context("decode packet"),
        };

        let spec = *decoded.spec();
        source_rate = spec.rate;
        let channels = spec.channels.count().max(1);

        let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        buf.copy_interleaved_ref(decoded);
        for frame in buf.samples().chunks(channels) {
            mono.push(frame.iter().sum::<f32>() / channels as f32);
        }
    }

    if mono.is_empty() {
        anyhow::bail!("no audio data in {}", path.display());
    }

    if source_rate != target_rate {
        mono = resample_linear(&mono, source_rate, target_rate);
    }
    Ok(mono)
}

fn resample_linear(samples: &[f32], source_rate: u32, target_rate: u32) -> Vec<f32> {
    if source_rate == target_rate || samples.is_empty() {
        return samples.to_vec();
    }
    let ratio = target_rate as f64 / source_rate as f64;
    let out_len = (samples.len() as f64 * ratio).ceil() as usize;
    let mut out = Vec::with_capacity(out_len);

    for i in 0..out_len {
        // fractional read position in the source
        let src_pos = i as f64 / ratio;
        let idx = src_pos.floor() as usize;
        let frac = (src_pos - idx as f64) as f32;
        if idx >= samples.len().saturating_sub(1) {
            out.push(*samples.last().unwrap_or(&0.0));
        } else {
            out.push(samples[idx] * (1.0 - frac) + samples[idx + 1] * frac);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, rate: u32, channels: u16, frames: &[f32]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in frames {
            writer.write_sample((s * 0x7FFF as f32) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn decodes_mono_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beep.wav");
        write_wav(&path, 44100, 1, &[0.0, 0.5, -0.5, 0.25]);

        let samples = decode_file(&path, 44100).unwrap();
        assert_eq!(samples.len(), 4);
        assert!((samples[1] - 0.5).abs() < 1e-3);
        assert!((samples[2] + 0.5).abs() < 1e-3);
    }

    #[test]
    fn downmixes_stereo_to_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.wav");
        // L=1.0, R=0.0 per frame -> mono 0.5
        write_wav(&path, 44100, 2, &[1.0, 0.0, 1.0, 0.0]);

        let samples = decode_file(&path, 44100).unwrap();
        assert_eq!(samples.len(), 2);
        assert!((samples[0] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn resamples_to_target_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slow.wav");
        write_wav(&path, 22050, 1, &vec![0.1; 1000]);

        let samples = decode_file(&path, 44100).unwrap();
        assert!((samples.len() as i64 - 2000).abs() <= 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(decode_file(Path::new("/nonexistent/x.mp3"), 44100).is_err());
    }

    #[test]
    fn resample_identity() {
        let s = vec![0.0, 1.0, 0.0];
        assert_eq!(resample_linear(&s, 44100, 44100), s);
    }
}
