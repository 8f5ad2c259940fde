//! WAV renderer — encodes a sample buffer to a RIFF/WAVE byte buffer.

use crate::error::MorseError;
use crate::timing::TimingConfig;

use super::synth;

/// Synthesize a Morse symbol string and encode it as a WAV file (16-bit
/// mono PCM) ready for download.
pub fn render_wav(code: &str, config: &TimingConfig) -> Result<Vec<u8>, MorseError> {
    let samples = synth::synthesize(code, config)?;
    Ok(encode_wav(&samples, config.sample_rate))
}

/// Encode mono f32 samples to a WAV byte buffer.
///
/// Samples are clamped to [-1, 1] and scaled to i16; NaN encodes as 0 so a
/// bad sample can never corrupt the file. The output is always
/// `44 + 2 * samples.len()` bytes.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        let sample = if sample.is_nan() { 0.0 } else { sample };
        let scaled = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        buf.extend_from_slice(&scaled.to_le_bytes());
    }

    buf
}
