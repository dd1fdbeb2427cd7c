//! WASM bindings for the DX spot dashboard utilities.
//!
//! Exposes the dashboard helpers to the page script as ES module exports:
//! - `SpotNotifier` - Web Audio chime for new spots
//! - `DashboardPreferences` - preferences persisted in `localStorage`
//! - callsign, band and CSV helper functions
//!
//! Nothing here throws; failures are logged to the browser console.

pub mod audio;
pub mod convert;
pub mod download;
pub mod storage;

use dx_dashboard_core as dx;
use dx_dashboard_core::config::DEFAULT_EXPORT_FILENAME;
use dx_dashboard_core::Beep;
use wasm_bindgen::prelude::*;

pub use audio::{WebAudioBackend, WebAudioContext};
pub use storage::LocalStorageStore;

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"DXSpider Dashboard utilities loaded".into());
}

// =============================================================================
// Notifier
// =============================================================================

/// Audio notification for new spots.
#[wasm_bindgen]
pub struct SpotNotifier {
    inner: dx::SpotNotifier<WebAudioBackend>,
}

#[wasm_bindgen]
impl SpotNotifier {
    /// Create a disabled notifier.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: dx::SpotNotifier::new(WebAudioBackend),
        }
    }

    /// Enable notifications, creating the audio context on first use.
    #[wasm_bindgen]
    pub fn enable(&mut self) {
        self.inner.enable();
        if !self.inner.has_context() {
            warn("Audio notifications unavailable: could not create AudioContext");
        }
    }

    /// Disable notifications. The audio context is kept.
    #[wasm_bindgen]
    pub fn disable(&mut self) {
        self.inner.disable();
    }

    /// Close the audio context and disable notifications.
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }

    /// Whether beeps will be played.
    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    /// Play a sine beep (defaults: 800 Hz, 100 ms).
    #[wasm_bindgen(js_name = playBeep)]
    pub fn play_beep(&self, frequency: Option<f32>, duration: Option<f32>) {
        let beep = Beep::new(
            frequency.unwrap_or(Beep::DEFAULT.frequency_hz),
            duration.unwrap_or(Beep::DEFAULT.duration_ms),
        );
        self.inner.play_beep(beep);
    }

    /// Play the new-spot chime.
    #[wasm_bindgen(js_name = notifyNewSpot)]
    pub fn notify_new_spot(&self) {
        self.inner.notify_new_spot();
    }
}

impl Default for SpotNotifier {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// Dashboard preferences stored in `localStorage`.
#[wasm_bindgen]
pub struct DashboardPreferences {
    inner: dx::DashboardPreferences<LocalStorageStore>,
}

#[wasm_bindgen]
impl DashboardPreferences {
    /// Open the preference store. Storage faults are reported with `console.warn`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: dx::DashboardPreferences::new(LocalStorageStore::open()).on_warning(warn),
        }
    }

    /// Set one preference. Values JSON cannot hold remove the key.
    #[wasm_bindgen]
    pub fn save(&self, key: &str, value: JsValue) {
        match convert::js_to_json(&value) {
            Ok(Some(json)) => self.inner.save(key, json),
            Ok(None) => self.inner.remove(key),
            Err(e) => warn(&format!("Failed to save preferences: {:?}", e)),
        }
    }

    /// Read all preferences as an object; `{}` if missing or corrupt.
    #[wasm_bindgen]
    pub fn load(&self) -> JsValue {
        convert::json_to_js(&serde_json::Value::Object(self.inner.load()))
            .unwrap_or_else(|_| js_sys::Object::new().into())
    }

    /// Get one preference, or `default_value` (`null` if omitted) when absent.
    #[wasm_bindgen]
    pub fn get(&self, key: &str, default_value: JsValue) -> JsValue {
        let default_value = if default_value.is_undefined() {
            JsValue::NULL
        } else {
            default_value
        };

        match self.inner.get(key) {
            Some(value) => convert::json_to_js(&value).unwrap_or(default_value),
            None => default_value,
        }
    }

    /// Remove one preference.
    #[wasm_bindgen]
    pub fn remove(&self, key: &str) {
        self.inner.remove(key);
    }

    /// Remove every preference.
    #[wasm_bindgen]
    pub fn clear(&self) {
        self.inner.clear();
    }
}

impl Default for DashboardPreferences {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Callsigns and frequencies
// =============================================================================

/// Check a callsign against the basic amateur radio shape.
#[wasm_bindgen(js_name = isValidCallsign)]
pub fn is_valid_callsign(callsign: &str) -> bool {
    dx::is_valid_callsign(callsign)
}

/// Country prefix of a callsign, or an empty string.
#[wasm_bindgen(js_name = extractPrefix)]
pub fn extract_prefix(callsign: &str) -> String {
    dx::extract_prefix(callsign).to_string()
}

/// Callsign without its `-SSID` or `/suffix`.
#[wasm_bindgen(js_name = stripSSID)]
pub fn strip_ssid(callsign: &str) -> String {
    dx::strip_ssid(callsign).to_string()
}

/// Band label for a kHz frequency, or `"other"`.
#[wasm_bindgen(js_name = getBandFromFrequency)]
pub fn get_band_from_frequency(freq_khz: f64) -> String {
    dx::band_from_frequency(freq_khz).to_string()
}

/// Display text for a kHz frequency (`"14.2 MHz"`, `"500.0 kHz"`).
#[wasm_bindgen(js_name = formatFrequency)]
pub fn format_frequency(freq_khz: f64) -> String {
    dx::format_frequency(freq_khz)
}

// =============================================================================
// Export
// =============================================================================

/// Render an array of spot objects as CSV text.
#[wasm_bindgen(js_name = exportToCSV)]
pub fn export_to_csv(spots: JsValue) -> String {
    dx::export_to_csv(&convert::spots_from_js(&spots))
}

/// Download an array of spot objects as a CSV file.
#[wasm_bindgen(js_name = downloadCSV)]
pub fn download_csv(spots: JsValue, filename: Option<String>) {
    let csv = export_to_csv(spots);
    let filename = filename.as_deref().unwrap_or(DEFAULT_EXPORT_FILENAME);

    if let Err(e) = download::trigger_download(&csv, filename) {
        web_sys::console::error_1(&format!("Failed to download CSV: {:?}", e).into());
    }
}
