#![forbid(unsafe_code)]

//! Interactive demo: a phone input with shake feedback in the terminal.
//!
//! Type a number; invalid input shakes the field and lists the errors
//! below it. `Tab` cycles locales, `Esc` or `Ctrl+C` quits.

use crossterm::cursor::{MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use phoneform::PhoneInput;
use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

const LOCALES: &[&str] = &["US", "TR", "GB", "XX"];

/// Left margin the shake displaces around.
const BASE_COLUMN: f32 = 4.0;

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let result = run();

    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run() -> io::Result<()> {
    let mut locale_idx = 0;
    let mut input = PhoneInput::new()
        .with_locale(LOCALES[locale_idx])
        .with_placeholder("Enter phone number");
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        input.tick(now - last_frame);
        last_frame = now;

        draw(&input)?;

        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Tab => {
                        locale_idx = (locale_idx + 1) % LOCALES.len();
                        let text = input.value().to_string();
                        input = PhoneInput::new()
                            .with_locale(LOCALES[locale_idx])
                            .with_placeholder("Enter phone number");
                        input.set_text(text);
                    }
                    KeyCode::Char(c) => input.insert_char(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Left => input.move_cursor_left(),
                    KeyCode::Right => input.move_cursor_right(),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

fn draw(input: &PhoneInput) -> io::Result<()> {
    let data = input.render_data();
    let mut out = stdout();

    let column = (BASE_COLUMN + data.animation_offset).max(0.0).round() as u16;
    let error_color = Color::Rgb {
        r: data.error_color.r,
        g: data.error_color.g,
        b: data.error_color.b,
    };

    queue!(out, Clear(ClearType::All), MoveTo(2, 1))?;
    queue!(
        out,
        Print(format!(
            "phoneform demo — locale {} (Tab to switch, Esc to quit)",
            input.locale()
        ))
    )?;

    queue!(out, MoveTo(column, 3))?;
    if data.display_text.is_empty() {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(data.placeholder),
            ResetColor
        )?;
    } else if data.validation.is_valid() {
        queue!(out, Print(&data.display_text))?;
    } else {
        queue!(
            out,
            SetForegroundColor(error_color),
            Print(&data.display_text),
            ResetColor
        )?;
    }

    for (i, error) in data.validation.errors().iter().enumerate() {
        queue!(
            out,
            MoveTo(4, 5 + i as u16),
            SetForegroundColor(error_color),
            Print(error),
            ResetColor
        )?;
    }

    queue!(out, MoveTo(column + data.cursor_column as u16, 3), Show)?;
    out.flush()
}
