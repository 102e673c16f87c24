#![forbid(unsafe_code)]

//! Minimal color value for render hints.

/// A 24-bit RGB color handed to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Default error color (red).
    pub const ERROR_RED: Rgb = Rgb::new(220, 60, 60);

    /// Construct from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::ERROR_RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_error_red() {
        assert_eq!(Rgb::default(), Rgb::new(220, 60, 60));
    }
}
