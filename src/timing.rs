//! Morse timing model — the single source of truth for how a symbol
//! string maps onto time.
//!
//! A [`Schedule`] is built from the Morse string alone and measures
//! everything in integer units (dot = 1, dash = 3, inter-token gap = 1,
//! word separator and anything unrecognized = 2 units of silence). The
//! real-time playback path and the fixed-buffer synthesis path both derive
//! from the same segment list, so their total durations agree by
//! construction.

use serde::{Deserialize, Serialize};

use crate::error::MorseError;

/// Per-request timing configuration. Defaults match the web app:
/// 120 ms unit, 650 Hz tone, 44.1 kHz output, 0.6 gain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Base unit duration in milliseconds.
    pub unit_ms: f64,
    /// Tone frequency in Hz.
    pub freq_hz: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Output gain in [0, 1].
    pub gain: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            unit_ms: 120.0,
            freq_hz: 650.0,
            sample_rate: 44_100,
            gain: 0.6,
        }
    }
}

impl TimingConfig {
    /// Validate field ranges. NaN fails every comparison, so it is
    /// rejected by the same checks.
    pub fn validate(&self) -> Result<(), MorseError> {
        if !(self.unit_ms > 0.0) {
            return Err(MorseError::InvalidConfig {
                field: "unit_ms",
                value: self.unit_ms,
            });
        }
        if !(self.freq_hz > 0.0) {
            return Err(MorseError::InvalidConfig {
                field: "freq_hz",
                value: self.freq_hz,
            });
        }
        if self.sample_rate == 0 {
            return Err(MorseError::InvalidConfig {
                field: "sample_rate",
                value: 0.0,
            });
        }
        if !(self.gain >= 0.0 && self.gain <= 1.0) {
            return Err(MorseError::InvalidConfig {
                field: "gain",
                value: self.gain,
            });
        }
        Ok(())
    }

    /// Unit duration in seconds.
    pub fn unit_secs(&self) -> f64 {
        self.unit_ms / 1000.0
    }

    /// Samples per unit: `round(unit_ms / 1000 * sample_rate)`.
    pub fn unit_samples(&self) -> usize {
        (self.unit_secs() * self.sample_rate as f64).round() as usize
    }
}

/// Whether a segment carries tone or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Tone,
    Silence,
}

/// One contiguous span of tone or silence, measured in units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Offset from the start of the schedule, in units.
    pub start_units: u32,
    pub duration_units: u32,
    pub kind: SegmentKind,
}

/// The full timing plan for one Morse string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Segments in time order, covering [0, total_units) without gaps.
    pub segments: Vec<Segment>,
    /// Total length in units (sum of all segment durations).
    pub total_units: u32,
}

/// One playback entry: a span of tone or silence in seconds, relative to
/// the synthesis start time. The host schedules these against its own
/// audio clock, fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneEvent {
    pub start_secs: f64,
    pub duration_secs: f64,
    /// True for tone, false for silence.
    pub tone: bool,
}

impl Schedule {
    /// Build a schedule from a Morse symbol string.
    ///
    /// Per character: `.` is one unit of tone plus one unit of gap, `-` is
    /// three units of tone plus one unit of gap, and anything else (space,
    /// `/`, or an unrecognized character) is two units of silence. An
    /// empty string produces an empty schedule.
    pub fn from_morse(code: &str) -> Schedule {
        let mut segments = Vec::new();
        let mut cursor = 0u32;

        let mut push = |cursor: &mut u32, duration: u32, kind: SegmentKind| {
            segments.push(Segment {
                start_units: *cursor,
                duration_units: duration,
                kind,
            });
            *cursor += duration;
        };

        for ch in code.chars() {
            match ch {
                '.' => {
                    push(&mut cursor, 1, SegmentKind::Tone);
                    push(&mut cursor, 1, SegmentKind::Silence);
                }
                '-' => {
                    push(&mut cursor, 3, SegmentKind::Tone);
                    push(&mut cursor, 1, SegmentKind::Silence);
                }
                _ => push(&mut cursor, 2, SegmentKind::Silence),
            }
        }

        Schedule {
            segments,
            total_units: cursor,
        }
    }

    /// Total playback duration in seconds under the given config.
    pub fn duration_secs(&self, config: &TimingConfig) -> f64 {
        self.total_units as f64 * config.unit_secs()
    }

    /// Exact sample count the synthesis path will allocate.
    pub fn total_samples(&self, config: &TimingConfig) -> usize {
        self.total_units as usize * config.unit_samples()
    }

    /// Real-time playback plan: one [`ToneEvent`] per segment, offsets in
    /// seconds. Each call derives a fresh plan, so overlapping playbacks
    /// never share a timing cursor.
    pub fn events(&self, config: &TimingConfig) -> Vec<ToneEvent> {
        let unit = config.unit_secs();
        self.segments
            .iter()
            .map(|seg| ToneEvent {
                start_secs: seg.start_units as f64 * unit,
                duration_secs: seg.duration_units as f64 * unit,
                tone: seg.kind == SegmentKind::Tone,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        TimingConfig::default().validate().expect("default config");
    }

    #[test]
    fn config_rejects_bad_fields() {
        let mut config = TimingConfig::default();
        config.unit_ms = 0.0;
        assert!(config.validate().is_err());

        let mut config = TimingConfig::default();
        config.freq_hz = -1.0;
        assert!(config.validate().is_err());

        let mut config = TimingConfig::default();
        config.sample_rate = 0;
        assert!(config.validate().is_err());

        let mut config = TimingConfig::default();
        config.gain = 1.5;
        assert!(config.validate().is_err());

        let mut config = TimingConfig::default();
        config.gain = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unit_samples_rounds() {
        let config = TimingConfig {
            unit_ms: 120.0,
            sample_rate: 44_100,
            ..TimingConfig::default()
        };
        assert_eq!(config.unit_samples(), 5292);

        // 10 ms at 44.1 kHz is exactly 441; 10.01 ms rounds up.
        let config = TimingConfig {
            unit_ms: 10.01,
            sample_rate: 44_100,
            ..TimingConfig::default()
        };
        assert_eq!(config.unit_samples(), 441);
    }

    #[test]
    fn dot_is_two_units() {
        let schedule = Schedule::from_morse(".");
        assert_eq!(schedule.total_units, 2);
        assert_eq!(schedule.segments.len(), 2);
        assert_eq!(schedule.segments[0].kind, SegmentKind::Tone);
        assert_eq!(schedule.segments[0].duration_units, 1);
        assert_eq!(schedule.segments[1].kind, SegmentKind::Silence);
    }

    #[test]
    fn dash_is_four_units() {
        let schedule = Schedule::from_morse("-");
        assert_eq!(schedule.total_units, 4);
        assert_eq!(schedule.segments[0].duration_units, 3);
    }

    #[test]
    fn dash_tone_is_three_times_dot_tone() {
        let dot = Schedule::from_morse(".");
        let dash = Schedule::from_morse("-");
        assert_eq!(
            dash.segments[0].duration_units,
            3 * dot.segments[0].duration_units
        );
    }

    #[test]
    fn separator_is_two_units_of_silence() {
        let schedule = Schedule::from_morse("/");
        assert_eq!(schedule.total_units, 2);
        assert_eq!(schedule.segments[0].kind, SegmentKind::Silence);
    }

    #[test]
    fn unrecognized_symbol_is_two_units_of_silence() {
        let schedule = Schedule::from_morse("x");
        assert_eq!(schedule.total_units, 2);
        assert_eq!(schedule.segments[0].kind, SegmentKind::Silence);
    }

    #[test]
    fn empty_string_is_empty_schedule() {
        let schedule = Schedule::from_morse("");
        assert_eq!(schedule.total_units, 0);
        assert!(schedule.segments.is_empty());
    }

    #[test]
    fn segments_tile_the_timeline() {
        let schedule = Schedule::from_morse(".- / -...");
        let mut cursor = 0;
        for seg in &schedule.segments {
            assert_eq!(seg.start_units, cursor, "segment gap at {cursor}");
            cursor += seg.duration_units;
        }
        assert_eq!(cursor, schedule.total_units);
    }

    #[test]
    fn events_match_segments() {
        let config = TimingConfig::default();
        let schedule = Schedule::from_morse(".-");
        let events = schedule.events(&config);
        assert_eq!(events.len(), schedule.segments.len());
        assert_eq!(events[0].start_secs, 0.0);
        assert_eq!(events[0].duration_secs, 0.12);
        assert!(events[0].tone);
        assert!(!events[1].tone);

        let last = events.last().unwrap();
        let total = last.start_secs + last.duration_secs;
        assert!((total - schedule.duration_secs(&config)).abs() < 1e-12);
    }

    #[test]
    fn events_serialize_to_json() {
        let config = TimingConfig::default();
        let events = Schedule::from_morse(".").events(&config);
        let json = serde_json::to_string(&events).expect("serialize events");
        assert!(json.contains("\"tone\":true"), "unexpected JSON: {json}");
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let config: TimingConfig =
            serde_json::from_str(r#"{"unit_ms": 60.0, "freq_hz": 600.0}"#).expect("deserialize");
        assert_eq!(config.unit_ms, 60.0);
        assert_eq!(config.freq_hz, 600.0);
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.gain, 0.6);
    }
}
