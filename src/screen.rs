//! 16:9 screen dimensions derived from a diagonal size.

use crate::float_types::{Real, inch_to_cm};

/// Width of a 16:9 panel per inch of diagonal (16 / √(16² + 9²)).
pub const WIDTH_PER_DIAGONAL: Real = 0.87157;
/// Height of a 16:9 panel per inch of diagonal (9 / √(16² + 9²)).
pub const HEIGHT_PER_DIAGONAL: Real = 0.4903;

/// A 16:9 screen, identified by its diagonal in whole inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Screen {
    pub diagonal_inch: u32,
}

impl Screen {
    pub const fn new(diagonal_inch: u32) -> Self {
        Self { diagonal_inch }
    }

    #[inline]
    pub const fn diagonal(&self) -> Real {
        self.diagonal_inch as Real
    }

    /// Visible width in inches.
    pub const fn width_inch(&self) -> Real {
        self.diagonal() * WIDTH_PER_DIAGONAL
    }

    /// Visible height in inches.
    pub const fn height_inch(&self) -> Real {
        self.diagonal() * HEIGHT_PER_DIAGONAL
    }

    /// Visible width in centimetres.
    pub const fn width_cm(&self) -> Real {
        inch_to_cm(self.width_inch())
    }

    /// Visible height in centimetres.
    pub const fn height_cm(&self) -> Real {
        inch_to_cm(self.height_inch())
    }
}

impl From<u32> for Screen {
    fn from(diagonal_inch: u32) -> Self {
        Self::new(diagonal_inch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_five_inch_panel() {
        let screen = Screen::new(65);
        assert!((screen.width_inch() - 56.652).abs() < 1e-3);
        assert!((screen.height_cm() - 80.948).abs() < 1e-2);
    }

    #[test]
    fn aspect_is_sixteen_by_nine() {
        let screen = Screen::new(100);
        let ratio = screen.width_cm() / screen.height_cm();
        assert!((ratio - 16.0 / 9.0).abs() < 1e-3);
    }
}
