pub mod alphabet;
pub mod dsp;
pub mod error;
pub mod quiz;
pub mod timing;
pub mod translate;

use crate::timing::{Schedule, TimingConfig};
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the morsetone-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: convert text to a Morse symbol string (unsupported
/// characters elided).
#[wasm_bindgen]
pub fn text_to_morse(text: &str) -> String {
    translate::text_to_morse(text)
}

/// WASM-exposed: decode a Morse symbol string to lowercase text
/// (unmatched tokens dropped).
#[wasm_bindgen]
pub fn morse_to_text(code: &str) -> String {
    translate::morse_to_text(code)
}

/// Deserialize a JS config object; `null`/`undefined` means defaults.
fn config_from_js(config: JsValue) -> Result<TimingConfig, JsValue> {
    let config: TimingConfig = if config.is_undefined() || config.is_null() {
        TimingConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&format!("{e}")))?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(config)
}

/// WASM-exposed: build the real-time playback schedule for a Morse string.
/// Returns an array of `{ start_secs, duration_secs, tone }` entries the
/// host schedules against its own audio clock, fire-and-forget.
#[wasm_bindgen]
pub fn morse_schedule(code: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let events = Schedule::from_morse(code).events(&config);
    serde_wasm_bindgen::to_value(&events).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a Morse string to a WAV byte array (16-bit mono
/// PCM) for download.
#[wasm_bindgen]
pub fn render_morse_wav(code: &str, config: JsValue) -> Result<Vec<u8>, JsValue> {
    let config = config_from_js(config)?;
    dsp::renderer::render_wav(code, &config).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a Morse string to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_morse_samples(code: &str, config: JsValue) -> Result<Vec<f32>, JsValue> {
    let config = config_from_js(config)?;
    dsp::synth::synthesize(code, &config).map_err(|e| JsValue::from_str(&format!("{e}")))
}
