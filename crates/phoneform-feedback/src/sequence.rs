#![forbid(unsafe_code)]

//! Shake sequence definition and sampling.

use std::time::Duration;

/// Default displacement amplitude, in render cells (or whatever unit the
/// host maps offsets to).
pub const STANDARD_AMPLITUDE: f32 = 10.0;

/// Default duration of each leg.
pub const STANDARD_LEG_MS: u64 = 100;

/// One leg of a shake: interpolate from the previous target to `target`
/// over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeLeg {
    /// Displacement target at the end of the leg.
    pub target: f32,
    /// Leg duration. Zero-duration legs jump immediately.
    pub duration: Duration,
}

impl ShakeLeg {
    /// Convenience constructor.
    #[must_use]
    pub fn new(target: f32, duration: Duration) -> Self {
        Self { target, duration }
    }
}

/// A fixed, ordered sequence of displacement targets over time.
///
/// Sampling always starts from offset `0.0` and moves through each leg's
/// target with linear interpolation. The sequence is a pure description;
/// timing state lives in the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakeSequence {
    legs: Vec<ShakeLeg>,
}

impl ShakeSequence {
    /// Build a sequence from explicit legs.
    #[must_use]
    pub fn new(legs: Vec<ShakeLeg>) -> Self {
        Self { legs }
    }

    /// The standard attention pulse: four equal legs `+10, -10, +10, 0`
    /// at 100 ms each (400 ms total), ending back at rest.
    #[must_use]
    pub fn standard() -> Self {
        let leg = Duration::from_millis(STANDARD_LEG_MS);
        Self::new(vec![
            ShakeLeg::new(STANDARD_AMPLITUDE, leg),
            ShakeLeg::new(-STANDARD_AMPLITUDE, leg),
            ShakeLeg::new(STANDARD_AMPLITUDE, leg),
            ShakeLeg::new(0.0, leg),
        ])
    }

    /// The legs in playback order.
    #[must_use]
    pub fn legs(&self) -> &[ShakeLeg] {
        &self.legs
    }

    /// Sum of all leg durations.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.legs.iter().map(|leg| leg.duration).sum()
    }

    /// Largest displacement magnitude any sample can reach.
    #[must_use]
    pub fn amplitude(&self) -> f32 {
        self.legs.iter().map(|leg| leg.target.abs()).fold(0.0, f32::max)
    }

    /// Sample the displacement at `elapsed` time into the sequence.
    ///
    /// Before the first leg the offset is `0.0`; past the total duration
    /// it stays at the final leg's target.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let mut from = 0.0_f32;
        let mut consumed = Duration::ZERO;

        for leg in &self.legs {
            let end = consumed + leg.duration;
            if elapsed < end && !leg.duration.is_zero() {
                let into = (elapsed - consumed).as_secs_f32();
                let t = (into / leg.duration.as_secs_f32()).clamp(0.0, 1.0);
                return from + (leg.target - from) * t;
            }
            from = leg.target;
            consumed = end;
        }

        from
    }
}

impl Default for ShakeSequence {
    fn default() -> Self {
        Self::standard()
    }
}
