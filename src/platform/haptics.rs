//! Vibration feedback
//!
//! Optional capability: when the device can't vibrate nothing else changes.

/// Something that can buzz the device
pub trait HapticSink {
    /// Single pulse
    fn pulse(&mut self, duration_ms: u32);
    /// Alternating on/off durations, starting with on
    fn pulse_pattern(&mut self, pattern_ms: &[u32]);
}

/// Devices without a motor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticSink for NoHaptics {
    fn pulse(&mut self, _duration_ms: u32) {}
    fn pulse_pattern(&mut self, _pattern_ms: &[u32]) {}
}

/// `navigator.vibrate` (Android browsers; iOS silently ignores it)
#[cfg(target_arch = "wasm32")]
pub struct WebVibration {
    navigator: web_sys::Navigator,
}

#[cfg(target_arch = "wasm32")]
impl WebVibration {
    pub fn new() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        Some(Self { navigator })
    }
}

#[cfg(target_arch = "wasm32")]
impl HapticSink for WebVibration {
    fn pulse(&mut self, duration_ms: u32) {
        let _ = self.navigator.vibrate_with_duration(duration_ms);
    }

    fn pulse_pattern(&mut self, pattern_ms: &[u32]) {
        let pattern: js_sys::Array = pattern_ms
            .iter()
            .map(|&ms| wasm_bindgen::JsValue::from(ms))
            .collect();
        let _ = self.navigator.vibrate_with_pattern(&pattern);
    }
}
