//! New-spot audio notification.
//!
//! [`SpotNotifier`] owns at most one audio context, created the first time it
//! is enabled and kept until [`SpotNotifier::dispose`]. The context itself
//! comes from an [`AudioBackend`] so the browser and host tests plug in their
//! own output.

use crate::error::Result;
use crate::tone::Beep;

/// Live audio output able to play beeps.
pub trait ToneOutput {
    /// Start a beep. Each call must use its own transient nodes/buffers so
    /// overlapping beeps do not interfere.
    fn play(&self, beep: Beep) -> Result<()>;

    /// Release the output.
    fn close(self);
}

/// Factory for audio contexts.
pub trait AudioBackend {
    /// Context type produced by this backend
    type Context: ToneOutput;

    /// Create a new audio context.
    fn create_context(&self) -> Result<Self::Context>;
}

/// Audio chime for new spots. Disabled until [`enable`](Self::enable) is called.
pub struct SpotNotifier<B: AudioBackend> {
    backend: B,
    enabled: bool,
    context: Option<B::Context>,
}

impl<B: AudioBackend> SpotNotifier<B> {
    /// Create a disabled notifier with no audio context yet.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            enabled: false,
            context: None,
        }
    }

    /// Turn notifications on, creating the audio context if there is none.
    ///
    /// If the context cannot be created the failure is logged and the
    /// notifier stays silent.
    pub fn enable(&mut self) {
        self.enabled = true;
        if self.context.is_none() {
            match self.backend.create_context() {
                Ok(ctx) => {
                    tracing::debug!("Audio context created");
                    self.context = Some(ctx);
                }
                Err(e) => tracing::warn!(error = %e, "Audio notifications unavailable"),
            }
        }
    }

    /// Turn notifications off. The audio context is kept for reuse.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether beeps will actually be played.
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.context.is_some()
    }

    /// Whether an audio context currently exists.
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Close and drop the audio context and disable notifications.
    ///
    /// A later [`enable`](Self::enable) creates a fresh context.
    pub fn dispose(&mut self) {
        self.enabled = false;
        if let Some(ctx) = self.context.take() {
            ctx.close();
            tracing::debug!("Audio context closed");
        }
    }

    /// Play a beep if enabled. Silent beeps and playback errors are ignored.
    pub fn play_beep(&self, beep: Beep) {
        if !self.enabled || !beep.is_audible() {
            return;
        }
        let Some(ctx) = &self.context else {
            return;
        };
        if let Err(e) = ctx.play(beep) {
            tracing::warn!(error = %e, "Failed to play beep");
        }
    }

    /// Play the new-spot chime (880 Hz, 80 ms).
    pub fn notify_new_spot(&self) {
        self.play_beep(Beep::NEW_SPOT);
    }

    /// Audio backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
