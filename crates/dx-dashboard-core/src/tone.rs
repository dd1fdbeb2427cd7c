//! Notification beep.
//!
//! A beep is a sine tone at a fixed pitch whose gain starts at
//! [`BEEP_START_GAIN`] and decays exponentially to [`BEEP_END_GAIN`] over the
//! beep duration. Browser output schedules this on Web Audio nodes; other
//! sinks can use [`Beep::render`].

use core::f32::consts::PI;

use crate::config::{
    BEEP_END_GAIN, BEEP_START_GAIN, DEFAULT_BEEP_DURATION_MS, DEFAULT_BEEP_FREQUENCY_HZ,
    NEW_SPOT_DURATION_MS, NEW_SPOT_FREQUENCY_HZ,
};

/// Sine beep description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beep {
    /// Pitch in Hz
    pub frequency_hz: f32,
    /// Length in milliseconds
    pub duration_ms: f32,
}

impl Beep {
    /// Generic beep: 800 Hz for 100 ms.
    pub const DEFAULT: Self = Self::new(DEFAULT_BEEP_FREQUENCY_HZ, DEFAULT_BEEP_DURATION_MS);

    /// New-spot chime: 880 Hz for 80 ms.
    pub const NEW_SPOT: Self = Self::new(NEW_SPOT_FREQUENCY_HZ, NEW_SPOT_DURATION_MS);

    /// Create a beep.
    #[must_use]
    pub const fn new(frequency_hz: f32, duration_ms: f32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Whether the beep produces any sound.
    ///
    /// Non-positive or non-finite pitch or length is silent.
    #[must_use]
    pub fn is_audible(&self) -> bool {
        self.frequency_hz.is_finite()
            && self.frequency_hz > 0.0
            && self.duration_ms.is_finite()
            && self.duration_ms > 0.0
    }

    /// Length in seconds, the unit Web Audio schedules in.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.duration_ms) / 1000.0
    }

    /// Envelope gain `t` seconds after the start.
    ///
    /// Clamped to the start gain before 0 and the end gain after the beep.
    #[must_use]
    pub fn gain_at(&self, t: f32) -> f32 {
        let duration = self.duration_ms / 1000.0;
        if t <= 0.0 || duration <= 0.0 {
            return BEEP_START_GAIN;
        }
        let progress = (t / duration).min(1.0);
        BEEP_START_GAIN * (BEEP_END_GAIN / BEEP_START_GAIN).powf(progress)
    }

    /// Number of samples the beep spans at `sample_rate`.
    #[must_use]
    pub fn sample_count(&self, sample_rate: f32) -> usize {
        if !self.is_audible() || sample_rate <= 0.0 {
            return 0;
        }
        (sample_rate * self.duration_ms / 1000.0).round() as usize
    }

    /// Render the beep as mono samples.
    #[must_use]
    pub fn render(&self, sample_rate: f32) -> Vec<f32> {
        let count = self.sample_count(sample_rate);
        let phase_inc = 2.0 * PI * self.frequency_hz / sample_rate;
        let mut phase = 0.0f32;

        (0..count)
            .map(|n| {
                let sample = phase.sin() * self.gain_at(n as f32 / sample_rate);
                phase = wrap_phase(phase + phase_inc);
                sample
            })
            .collect()
    }
}

impl Default for Beep {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Wrap phase to range [-π, π].
#[inline]
fn wrap_phase(phase: f32) -> f32 {
    if phase > PI {
        phase - 2.0 * PI
    } else if phase < -PI {
        phase + 2.0 * PI
    } else {
        phase
    }
}
