//! Status display and RGB indicator traits

/// Maximum number of lines a status screen holds
pub const SCREEN_LINES: usize = 4;

/// Maximum characters per status line
pub const SCREEN_COLS: usize = 21;

/// Trait for the status display
///
/// The display acts as a dumb terminal: each call replaces the whole
/// screen with up to [`SCREEN_LINES`] short lines, centered by the
/// implementation. Empty lines are skipped.
pub trait Presenter {
    /// Replace the screen contents
    fn show(&mut self, lines: &[&str]);
}

impl<T: Presenter + ?Sized> Presenter for &mut T {
    fn show(&mut self, lines: &[&str]) {
        (**self).show(lines)
    }
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Indicator off
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Create a color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Trait for the single-pixel RGB indicator
pub trait Indicator {
    /// Set the indicator color (takes effect immediately)
    fn set_color(&mut self, color: Rgb);

    /// Turn the indicator off
    fn off(&mut self) {
        self.set_color(Rgb::OFF);
    }
}

impl<T: Indicator + ?Sized> Indicator for &mut T {
    fn set_color(&mut self, color: Rgb) {
        (**self).set_color(color)
    }
}
