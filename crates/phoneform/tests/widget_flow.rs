//! End-to-end widget behavior: validation results driving the shake
//! feedback across realistic typing sequences.

use phoneform::{PhoneInput, ShakeLeg, ShakeSequence};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn valid_invalid_invalid_valid_shakes_exactly_once() {
    let mut input = PhoneInput::new().with_locale("US");
    let mut shake_starts = 0;

    // All four results arrive within one sequence's 400 ms duration.
    for text in ["5551234567", "555123456", "55512345", "5551234567"] {
        let was_shaking = input.is_shaking();
        input.set_text(text);
        if input.is_shaking() && !was_shaking {
            shake_starts += 1;
        }
        input.tick(ms(50));
    }

    assert_eq!(shake_starts, 1);
}

#[test]
fn shake_rearms_after_completion_and_recovery() {
    let mut input = PhoneInput::new().with_locale("US");

    input.set_text("12");
    assert!(input.is_shaking());
    input.tick(ms(400));
    assert!(!input.is_shaking());

    // Still invalid: completed sequence must not re-trigger on its own.
    input.set_text("123");
    assert!(!input.is_shaking());

    // Recover, then break again: a fresh sequence starts.
    input.set_text("5551234567");
    input.set_text("555123456");
    assert!(input.is_shaking());
}

#[test]
fn recovery_mid_shake_lets_the_pulse_finish() {
    let mut input = PhoneInput::new().with_locale("US");
    input.set_text("12");
    input.tick(ms(100));
    input.set_text("5551234567");
    assert!(input.result().is_valid());
    assert!(input.is_shaking());
    input.tick(ms(300));
    assert!(!input.is_shaking());
    assert_eq!(input.animation_offset(), 0.0);
}

#[test]
fn per_keystroke_typing_flow() {
    let raw = Rc::new(RefCell::new(Vec::<String>::new()));
    let valid = Rc::new(RefCell::new(Vec::<String>::new()));
    let raw_sink = Rc::clone(&raw);
    let valid_sink = Rc::clone(&valid);

    let mut input = PhoneInput::new()
        .with_locale("US")
        .with_on_change(move |text| raw_sink.borrow_mut().push(text.to_string()))
        .with_on_valid(move |digits| valid_sink.borrow_mut().push(digits.to_string()));

    for c in "555-123-4567".chars() {
        input.insert_char(c);
        input.tick(ms(16));
    }

    // One raw notification per keystroke, in order.
    assert_eq!(raw.borrow().len(), 12);
    assert_eq!(raw.borrow().first().map(String::as_str), Some("5"));
    assert_eq!(raw.borrow().last().map(String::as_str), Some("555-123-4567"));

    // The valid channel fired only once the number was complete, with the
    // normalized digits rather than the raw text.
    assert_eq!(&*valid.borrow(), &["5551234567"]);
}

#[test]
fn custom_sequence_drives_offsets() {
    let sequence = ShakeSequence::new(vec![
        ShakeLeg::new(2.0, ms(100)),
        ShakeLeg::new(0.0, ms(100)),
    ]);
    let mut input = PhoneInput::new()
        .with_locale("US")
        .with_shake_sequence(sequence);

    input.set_text("12");
    input.tick(ms(50));
    assert!((input.animation_offset() - 1.0).abs() < 1e-4);
    input.tick(ms(100));
    assert!((input.animation_offset() - 1.0).abs() < 1e-4);
    input.tick(ms(50));
    assert!(!input.is_shaking());
}

#[test]
fn turkish_locale_end_to_end() {
    let mut input = PhoneInput::new().with_locale("TR");
    input.set_text("212 123 45 67");
    assert_eq!(
        input.result().errors(),
        ["Phone number must start with 5"]
    );
    assert!(input.is_shaking());

    input.set_text("532 123 45 67");
    assert!(input.result().is_valid());
}

#[test]
fn teardown_with_shake_in_flight_is_clean() {
    let mut input = PhoneInput::new().with_locale("US");
    input.set_text("12");
    input.tick(ms(50));
    assert!(input.is_shaking());
    // Dropping mid-sequence must release everything; there are no timers
    // or threads to orphan.
    drop(input);
}
