#![forbid(unsafe_code)]

//! The phone input widget.

use phoneform_feedback::{FeedbackController, ShakePhase, ShakeSequence};
use phoneform_rules::rules::RuleSet;
use phoneform_rules::{ValidationResult, normalize, rule_set_for};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Character used to mask input when masking is enabled.
pub const MASK_CHAR: char = '•';

type TextCallback = Box<dyn FnMut(&str)>;

/// Everything the host's renderer needs for one frame.
#[derive(Debug)]
pub struct RenderData<'a> {
    /// Current validation result; error messages in check order.
    pub validation: &'a ValidationResult,
    /// Instantaneous lateral shake displacement. `0.0` at rest.
    pub animation_offset: f32,
    /// Text to draw: the raw value, or mask characters when masking is on.
    pub display_text: String,
    /// Placeholder shown while the value is empty.
    pub placeholder: &'a str,
    /// Color for error text and the invalid border.
    pub error_color: crate::Rgb,
    /// Visual column of the cursor within the display text.
    pub cursor_column: usize,
}

/// A single-line phone number input with validation feedback.
///
/// Owns one [`FeedbackController`] for its whole lifetime, mutated in
/// place on each validity transition — animation state is never recreated
/// per event. Dropping the widget releases everything; there are no
/// background timers to leak.
///
/// Two distinct outward channels: [`on_change`](Self::with_on_change)
/// receives the raw text on every change (a pass-through, not a validated
/// value), and [`on_valid`](Self::with_on_valid) receives the normalized
/// digit string only when the current result is valid.
pub struct PhoneInput {
    value: String,
    cursor: usize,
    placeholder: String,
    mask_input: bool,
    error_color: crate::Rgb,
    rules: &'static RuleSet,
    result: ValidationResult,
    feedback: FeedbackController,
    on_change: Option<TextCallback>,
    on_valid: Option<TextCallback>,
}

impl PhoneInput {
    /// Create an empty input with the generic fallback rules.
    ///
    /// The result starts valid/neutral; validation runs from the first
    /// text change onward, so an untouched field never shakes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: String::new(),
            mask_input: false,
            error_color: crate::Rgb::ERROR_RED,
            rules: rule_set_for(""),
            result: ValidationResult::ok(),
            feedback: FeedbackController::default(),
            on_change: None,
            on_valid: None,
        }
    }

    // --- Builder methods ---

    /// Select the locale rule set (builder). Unknown tags fall back to
    /// the generic rules.
    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.rules = rule_set_for(locale);
        self
    }

    /// Set the error color (builder). Default is red.
    #[must_use]
    pub fn with_error_color(mut self, color: crate::Rgb) -> Self {
        self.error_color = color;
        self
    }

    /// Mask displayed input with [`MASK_CHAR`] (builder). Default off.
    #[must_use]
    pub fn with_mask_input(mut self, mask: bool) -> Self {
        self.mask_input = mask;
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the shake sequence (builder).
    #[must_use]
    pub fn with_shake_sequence(mut self, sequence: ShakeSequence) -> Self {
        self.feedback = FeedbackController::new(sequence);
        self
    }

    /// Set the raw-text channel (builder): called with the unmodified
    /// value on every change, valid or not.
    #[must_use]
    pub fn with_on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the valid-number channel (builder): called with the normalized
    /// digit string whenever a change leaves the value valid.
    #[must_use]
    pub fn with_on_valid(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_valid = Some(Box::new(callback));
        self
    }

    // --- Value access ---

    /// The raw text value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The current validation result.
    #[must_use]
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// The active locale rule set's canonical tag.
    #[must_use]
    pub fn locale(&self) -> &'static str {
        self.rules.locale
    }

    /// Cursor position as a grapheme index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // --- Editing ---

    /// Replace the whole value, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.cursor = self.grapheme_count();
        self.text_changed();
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        self.cursor += 1;
        self.text_changed();
    }

    /// Delete the grapheme before the cursor. No-op at the start.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor - 1);
        let byte_end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(byte_start..byte_end);
        self.cursor -= 1;
        self.text_changed();
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.text_changed();
    }

    /// Move the cursor one grapheme left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one grapheme right.
    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    // --- Animation ---

    /// Advance animation time. Call once per host frame.
    pub fn tick(&mut self, delta: Duration) {
        self.feedback.tick(delta);
    }

    /// Whether a shake sequence is in flight.
    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.feedback.phase() == ShakePhase::Shaking
    }

    /// Instantaneous shake displacement.
    #[must_use]
    pub fn animation_offset(&self) -> f32 {
        self.feedback.offset()
    }

    // --- Render contract ---

    /// Snapshot of everything the presentation layer needs.
    #[must_use]
    pub fn render_data(&self) -> RenderData<'_> {
        RenderData {
            validation: &self.result,
            animation_offset: self.feedback.offset(),
            display_text: self.display_text(),
            placeholder: &self.placeholder,
            error_color: self.error_color,
            cursor_column: self.cursor_column(),
        }
    }

    /// The text to draw: mask characters when masking is enabled.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.mask_input {
            std::iter::repeat(MASK_CHAR)
                .take(self.grapheme_count())
                .collect()
        } else {
            self.value.clone()
        }
    }

    /// Visual column of the cursor within the display text.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        if self.mask_input {
            // Mask characters are one cell wide each.
            return self.cursor;
        }
        self.value
            .graphemes(true)
            .take(self.cursor)
            .map(UnicodeWidthStr::width)
            .sum()
    }

    // --- Internal ---

    /// The change pipeline: validate, notify raw text, feed the feedback
    /// controller, notify the valid-number channel.
    fn text_changed(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "text_changed",
            locale = self.rules.locale,
            len = self.value.len()
        )
        .entered();

        self.result = self.rules.validate(&normalize(&self.value));

        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }

        self.feedback.observe(self.result.is_valid());

        if self.result.is_valid()
            && let Some(callback) = self.on_valid.as_mut()
        {
            let digits = normalize(&self.value).digits().to_string();
            callback(&digits);
        }
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

impl Default for PhoneInput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PhoneInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneInput")
            .field("value", &self.value)
            .field("cursor", &self.cursor)
            .field("locale", &self.rules.locale)
            .field("mask_input", &self.mask_input)
            .field("result", &self.result)
            .field("phase", &self.feedback.phase())
            .finish_non_exhaustive()
    }
}
