#![forbid(unsafe_code)]

//! Shake feedback for invalid input.
//!
//! A [`FeedbackController`] watches a stream of validation verdicts (one
//! per text change) and drives a bounded, non-overlapping shake animation:
//! a fixed sequence of lateral displacement targets interpolated linearly
//! over time. The controller is tick-driven — the host advances it with
//! `tick(delta)` each frame and samples `offset()` for rendering. No
//! threads, no timers: dropping the controller releases everything.
//!
//! # Example
//!
//! ```rust
//! use phoneform_feedback::FeedbackController;
//! use std::time::Duration;
//!
//! let mut feedback = FeedbackController::default();
//! assert!(feedback.observe(false)); // first invalid result starts a shake
//! feedback.tick(Duration::from_millis(50));
//! assert!(feedback.offset() > 0.0);
//! ```

pub mod controller;
pub mod sequence;

pub use controller::{FeedbackController, ShakePhase};
pub use sequence::{ShakeLeg, ShakeSequence};
