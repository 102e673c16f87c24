#![forbid(unsafe_code)]

//! The feedback state machine.
//!
//! Two phases, [`Idle`](ShakePhase::Idle) and
//! [`Shaking`](ShakePhase::Shaking). A shake starts on the edge into
//! invalidity (the previous observed result was valid, or there was no
//! previous result). While shaking, further invalid results neither
//! restart nor queue a second sequence, and a recovery to valid does not
//! abort the pulse in flight: the shake is a one-shot attention cue that
//! always runs to completion.

use crate::sequence::ShakeSequence;
use std::time::Duration;

/// Animation phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShakePhase {
    /// At rest; offset is `0.0`.
    #[default]
    Idle,
    /// A sequence is in flight.
    Shaking,
}

/// Turns a stream of validation verdicts into shake animations.
///
/// Event-driven on the input side ([`observe`](Self::observe), one call
/// per text change, in arrival order) and tick-driven on the time side
/// ([`tick`](Self::tick), host frame loop). Each widget instance owns its
/// own controller; nothing is shared.
#[derive(Debug, Clone)]
pub struct FeedbackController {
    sequence: ShakeSequence,
    phase: ShakePhase,
    elapsed: Duration,
    last_valid: Option<bool>,
}

impl FeedbackController {
    /// Create a controller with a custom shake sequence.
    #[must_use]
    pub fn new(sequence: ShakeSequence) -> Self {
        Self {
            sequence,
            phase: ShakePhase::Idle,
            elapsed: Duration::ZERO,
            last_valid: None,
        }
    }

    /// The sequence played on each trigger.
    #[must_use]
    pub fn sequence(&self) -> &ShakeSequence {
        &self.sequence
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ShakePhase {
        self.phase
    }

    /// Whether a sequence is in flight.
    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.phase == ShakePhase::Shaking
    }

    /// Instantaneous displacement for rendering. `0.0` while idle.
    #[must_use]
    pub fn offset(&self) -> f32 {
        match self.phase {
            ShakePhase::Idle => 0.0,
            ShakePhase::Shaking => self.sequence.sample(self.elapsed),
        }
    }

    /// Feed the next validation verdict, in arrival order.
    ///
    /// Returns `true` iff a new shake sequence starts: the result is
    /// invalid, no sequence is already in flight, and the previous
    /// observation (if any) was valid.
    pub fn observe(&mut self, is_valid: bool) -> bool {
        let was_valid = self.last_valid;
        self.last_valid = Some(is_valid);

        if is_valid || self.is_shaking() || was_valid == Some(false) {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            total_ms = self.sequence.total_duration().as_millis() as u64,
            "shake sequence started"
        );

        self.phase = ShakePhase::Shaking;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Advance the active sequence by `delta`.
    ///
    /// Returns `true` if a sequence was in flight (the offset may have
    /// changed). Once the total duration has elapsed the controller
    /// returns to idle with offset `0.0`, regardless of current validity.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.is_shaking() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.sequence.total_duration() {
            self.phase = ShakePhase::Idle;
            self.elapsed = Duration::ZERO;
        }
        true
    }
}

impl Default for FeedbackController {
    fn default() -> Self {
        Self::new(ShakeSequence::standard())
    }
}
