//! Fixed-length buffer synthesis — renders a Morse schedule to f32
//! samples.
//!
//! The whole buffer is allocated up front from the schedule's exact sample
//! count; tone segments are filled with a sine restarted per region, and
//! silence segments stay at zero. Pure and synchronous: every call
//! allocates a fresh buffer, so concurrent calls share nothing.

use crate::error::MorseError;
use crate::timing::{Schedule, SegmentKind, TimingConfig};

use super::oscillator::Oscillator;

/// Synthesize a Morse symbol string to a mono f32 sample buffer.
///
/// An empty string yields an empty buffer. The only error is an invalid
/// timing configuration.
pub fn synthesize(code: &str, config: &TimingConfig) -> Result<Vec<f32>, MorseError> {
    config.validate()?;
    Ok(render_schedule(&Schedule::from_morse(code), config))
}

/// Render an already-built schedule. The buffer length is exactly
/// `schedule.total_samples(config)`.
pub fn render_schedule(schedule: &Schedule, config: &TimingConfig) -> Vec<f32> {
    let unit = config.unit_samples();
    let mut samples = vec![0.0f32; schedule.total_samples(config)];
    let mut osc = Oscillator::new(config.freq_hz, config.sample_rate as f64);

    for seg in &schedule.segments {
        if seg.kind != SegmentKind::Tone {
            continue;
        }
        osc.reset();
        let start = seg.start_units as usize * unit;
        let len = seg.duration_units as usize * unit;
        for sample in &mut samples[start..start + len] {
            *sample = (osc.next_sample() * config.gain) as f32;
        }
    }

    samples
}
