//! DSP — pure Rust tone synthesis and WAV encoding.
//!
//! All synthesis runs in Rust for deterministic, cross-platform output.
//! The same code powers both WebAudio playback (via AudioWorklet + WASM)
//! and the downloadable WAV export.

pub mod oscillator;
pub mod renderer;
pub mod synth;
