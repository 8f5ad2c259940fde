//! Sine oscillator for Morse tone regions.

use std::f64::consts::PI;

/// A phase-accumulating sine oscillator.
///
/// Each tone region starts from phase zero, so the n-th sample of a region
/// is exactly `sin(2π · freq · n / sample_rate)`.
#[derive(Debug, Clone)]
pub struct Oscillator {
    pub frequency: f64,
    phase: f64,
    sample_rate: f64,
}

impl Oscillator {
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Oscillator {
            frequency,
            phase: 0.0,
            sample_rate,
        }
    }

    /// Phase increment per sample.
    fn phase_inc(&self) -> f64 {
        self.frequency / self.sample_rate
    }

    /// Generate the next sample.
    pub fn next_sample(&mut self) -> f64 {
        let sample = (2.0 * PI * self.phase).sin();

        self.phase += self.phase_inc();
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }

    /// Reset oscillator phase for the next tone region.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_zero_at_start() {
        let mut osc = Oscillator::new(650.0, 44100.0);
        let sample = osc.next_sample();
        assert!(sample.abs() < 1e-10, "Sine should start at 0, got {sample}");
    }

    #[test]
    fn sine_range() {
        let mut osc = Oscillator::new(650.0, 44100.0);
        for _ in 0..44100 {
            let s = osc.next_sample();
            assert!(s >= -1.0 && s <= 1.0, "Sine out of range: {s}");
        }
    }

    #[test]
    fn matches_direct_formula() {
        let (freq, rate) = (650.0, 44100.0);
        let mut osc = Oscillator::new(freq, rate);
        for i in 0..1000 {
            let expected = (2.0 * PI * freq * i as f64 / rate).sin();
            let got = osc.next_sample();
            assert!(
                (got - expected).abs() < 1e-6,
                "sample {i}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn reset_restarts_phase() {
        let mut osc = Oscillator::new(650.0, 44100.0);
        let first = osc.next_sample();
        for _ in 0..17 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.next_sample(), first);
    }
}
