//! Input limits and form defaults.
//!
//! The limits mirror the ranges the input form accepts. Values outside them
//! are rejected by [`ViewingInputs::validate`](crate::calculator::ViewingInputs::validate)
//! or pinned by [`ViewingInputs::clamped`](crate::calculator::ViewingInputs::clamped).

use crate::float_types::Real;

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Real,
    pub max: Real,
}

impl Range {
    pub const fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Real) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// NaN clamps to `min`.
    pub fn clamp(&self, value: Real) -> Real {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Accepted ranges for every measured input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputLimits {
    /// TV diagonal, inches.
    pub tv_size_inch: Range,
    /// Seated eye height, cm.
    pub eye_level_cm: Range,
    /// Manual viewing distance, metres.
    pub manual_distance_m: Range,
}

impl InputLimits {
    pub const STANDARD: InputLimits = InputLimits {
        tv_size_inch: Range::new(32.0, 120.0),
        eye_level_cm: Range::new(50.0, 150.0),
        manual_distance_m: Range::new(0.5, 10.0),
    };
}

impl Default for InputLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Values a fresh form starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub tv_size_inch: u32,
    pub eye_level_cm: Real,
    /// Pre-filled when the viewer switches to a manual distance.
    pub manual_distance_m: Real,
}

impl Defaults {
    pub const STANDARD: Defaults = Defaults {
        tv_size_inch: 65,
        eye_level_cm: 92.0,
        manual_distance_m: 3.6,
    };
}

impl Default for Defaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Vertical angles smaller than this (degrees) are not drawn as an arc.
pub const DEGENERATE_ANGLE_DEG: Real = 0.5;

const _: () = assert!(InputLimits::STANDARD.tv_size_inch.min < InputLimits::STANDARD.tv_size_inch.max);
const _: () = assert!(InputLimits::STANDARD.eye_level_cm.min < InputLimits::STANDARD.eye_level_cm.max);
const _: () = assert!(InputLimits::STANDARD.manual_distance_m.min > 0.0);
