//! TV mounting height for a seated viewer.
//!
//! In reclined (theater) seating the eye line tilts upward, so the screen
//! centre is raised by a fixed fraction of the viewing distance:
//! ```text
//! centre = eye_level + distance × 0.22
//! angle  = atan(0.22) ≈ 12.4°
//! ```
//! In ergonomic seating the centre sits on the neutral eye line.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::screen::Screen;
use std::fmt;
use std::str::FromStr;

/// Rise of the TV centre per unit of viewing distance in reclined seating.
pub const VERTICAL_FACTOR: Real = 0.22;

/// Mounting-height strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MountingMode {
    /// Screen centre at eye level, neutral neck angle.
    #[default]
    Ergonomic,
    /// Theater-style: screen raised above a reclined eye line.
    Reclined,
}

impl MountingMode {
    /// Upward angle from the horizontal eye line to the screen centre, in degrees.
    pub fn vertical_angle_deg(self) -> Real {
        match self {
            MountingMode::Ergonomic => 0.0,
            MountingMode::Reclined => VERTICAL_FACTOR.atan().to_degrees(),
        }
    }

    /// How far above eye level the screen centre goes at `distance_cm`.
    pub fn rise_cm(self, distance_cm: Real) -> Real {
        match self {
            MountingMode::Ergonomic => 0.0,
            MountingMode::Reclined => distance_cm * VERTICAL_FACTOR,
        }
    }
}

impl fmt::Display for MountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MountingMode::Ergonomic => "ergonomic",
            MountingMode::Reclined => "reclined",
        })
    }
}

impl FromStr for MountingMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ergonomic" | "standard" | "neutral" => Ok(MountingMode::Ergonomic),
            "reclined" | "theater" | "theatre" => Ok(MountingMode::Reclined),
            _ => Err(GeometryError::UnknownMountingMode(s.trim().to_string())),
        }
    }
}

/// Where the TV goes on the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MountingHeight {
    /// Floor to screen centre.
    pub center_cm: Real,
    /// Floor to bottom edge of the screen.
    pub bottom_cm: Real,
    /// Upward angle from eye line to screen centre.
    pub vertical_angle_deg: Real,
}

impl MountingHeight {
    /// Floor to top edge, given the screen the height was computed for.
    pub fn top_cm(&self, screen: &Screen) -> Real {
        self.bottom_cm + screen.height_cm()
    }
}

/// Mounting height of `screen` for a viewer whose eyes are `eye_level_cm`
/// above the floor, sitting `distance_cm` from the wall.
pub fn mounting_height(
    eye_level_cm: Real,
    distance_cm: Real,
    screen: &Screen,
    mode: MountingMode,
) -> MountingHeight {
    let center_cm = eye_level_cm + mode.rise_cm(distance_cm);
    MountingHeight {
        center_cm,
        bottom_cm: center_cm - screen.height_cm() / 2.0,
        vertical_angle_deg: mode.vertical_angle_deg(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reclined_angle_is_about_twelve_degrees() {
        let angle = MountingMode::Reclined.vertical_angle_deg();
        assert!((angle - 12.4074).abs() < 1e-3, "got {angle}");
    }

    #[test]
    fn top_edge_is_one_screen_above_bottom() {
        let screen = Screen::new(55);
        let height = mounting_height(100.0, 250.0, &screen, MountingMode::Ergonomic);
        assert!((height.top_cm(&screen) - height.bottom_cm - screen.height_cm()).abs() < 1e-9);
    }

    #[test]
    fn mode_names() {
        assert_eq!("Theater".parse::<MountingMode>(), Ok(MountingMode::Reclined));
        assert_eq!(MountingMode::Ergonomic.to_string(), "ergonomic");
        let err = "Sideways".parse::<MountingMode>().unwrap_err();
        assert_eq!(err, GeometryError::UnknownMountingMode("Sideways".to_string()));
        assert!(err.is_invalid_input());
    }
}
