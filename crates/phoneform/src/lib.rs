#![forbid(unsafe_code)]

//! Validated phone-number input widget.
//!
//! [`PhoneInput`] owns the text buffer, the locale rule set, and a
//! long-lived shake [`FeedbackController`]; every text change runs the
//! pipeline validate → notify raw text → feed feedback → notify valid
//! number. The host renders from [`RenderData`] and drives animation time
//! with [`PhoneInput::tick`] — the widget never touches a screen itself.
//!
//! # Example
//!
//! ```rust
//! use phoneform::PhoneInput;
//! use std::time::Duration;
//!
//! let mut input = PhoneInput::new().with_locale("US");
//! input.set_text("555-123-4567");
//! assert!(input.result().is_valid());
//!
//! input.set_text("12");
//! assert!(input.is_shaking());
//! input.tick(Duration::from_millis(50));
//! assert!(input.render_data().animation_offset > 0.0);
//! ```

pub mod color;
pub mod input;

pub use color::Rgb;
pub use input::{MASK_CHAR, PhoneInput, RenderData};

pub use phoneform_feedback::{FeedbackController, ShakeLeg, ShakePhase, ShakeSequence};
pub use phoneform_rules::{ValidationResult, validate};
