//! Progress events emitted by the decryption pipeline.
//!
//! Events are plain values: emitted at fixed checkpoints, never stored.
//! Decryption behaves identically whether or not anything consumes them.

use std::fmt::{Display, Formatter, Result};

/// Pipeline stage a progress event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Reading,
    Deriving,
    Decrypting,
    Complete,
    Error,
}

impl Stage {
    /// Returns a human-readable label for the stage.
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Deriving => "deriving",
            Self::Decrypting => "decrypting",
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }
}

impl Display for Stage {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// A single progress checkpoint.
#[derive(Clone, Debug)]
pub struct ProgressEvent {
    pub stage: Stage,

    /// Percent complete within the stage, 0 to 100. Within the decrypting
    /// stage this value never decreases and reaches 100 on success.
    pub percent: u8,

    /// Human-readable status text.
    pub message: String,
}

impl ProgressEvent {
    #[must_use]
    pub fn new(stage: Stage, percent: u8, message: impl Into<String>) -> Self {
        Self { stage, percent, message: message.into() }
    }
}

/// Receives progress events from the pipeline.
pub trait ProgressSink {
    fn emit(&mut self, event: ProgressEvent);
}

/// Discards every event.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&mut self, _event: ProgressEvent) {}
}

impl<F: FnMut(ProgressEvent)> ProgressSink for F {
    fn emit(&mut self, event: ProgressEvent) {
        self(event);
    }
}
