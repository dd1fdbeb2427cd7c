//! Web Audio output for spot notifications.
//!
//! Each beep builds its own oscillator -> gain -> destination chain on a
//! shared `AudioContext`, schedules the envelope and lets the nodes stop on
//! their own.

use dx_dashboard_core::config::{BEEP_END_GAIN, BEEP_START_GAIN};
use dx_dashboard_core::{AudioBackend, Beep, DashboardError, ToneOutput};
use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, OscillatorType};

/// Creates browser audio contexts.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebAudioBackend;

impl AudioBackend for WebAudioBackend {
    type Context = WebAudioContext;

    fn create_context(&self) -> dx_dashboard_core::Result<WebAudioContext> {
        let ctx = AudioContext::new()
            .map_err(|e| DashboardError::AudioUnavailable(format!("{:?}", e)))?;
        Ok(WebAudioContext { ctx })
    }
}

/// Browser `AudioContext` able to play beeps.
pub struct WebAudioContext {
    ctx: AudioContext,
}

impl WebAudioContext {
    fn schedule(&self, beep: Beep) -> Result<(), JsValue> {
        let oscillator = self.ctx.create_oscillator()?;
        let gain_node = self.ctx.create_gain()?;

        // oscillator -> gain -> destination
        oscillator.connect_with_audio_node(&gain_node)?;
        gain_node.connect_with_audio_node(&self.ctx.destination())?;

        oscillator.frequency().set_value(beep.frequency_hz);
        oscillator.set_type(OscillatorType::Sine);

        let now = self.ctx.current_time();
        let end = now + beep.duration_secs();

        let gain = gain_node.gain();
        gain.set_value_at_time(BEEP_START_GAIN, now)?;
        gain.exponential_ramp_to_value_at_time(BEEP_END_GAIN, end)?;

        oscillator.start_with_when(now)?;
        oscillator.stop_with_when(end)?;
        Ok(())
    }
}

impl ToneOutput for WebAudioContext {
    fn play(&self, beep: Beep) -> dx_dashboard_core::Result<()> {
        self.schedule(beep)
            .map_err(|e| DashboardError::AudioUnavailable(format!("{:?}", e)))
    }

    fn close(self) {
        if let Err(e) = self.ctx.close() {
            web_sys::console::warn_1(&format!("Failed to close AudioContext: {:?}", e).into());
        }
    }
}
