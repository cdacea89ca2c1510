//! Plain-text walk through a calculation, with the numbers substituted in.

use crate::calculator::{ViewingInputs, ViewingResult};
use crate::mounting::{MountingMode, VERTICAL_FACTOR};
use std::fmt;

/// Borrowed view over one calculation that renders its working on `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Breakdown<'a> {
    inputs: &'a ViewingInputs,
    result: &'a ViewingResult,
}

impl<'a> Breakdown<'a> {
    pub const fn new(inputs: &'a ViewingInputs, result: &'a ViewingResult) -> Self {
        Self { inputs, result }
    }

    /// The centre height formula for the chosen mounting mode.
    pub const fn formula(&self) -> &'static str {
        match self.inputs.mounting_mode {
            MountingMode::Reclined => "Height = EL + (VD × 0.22)",
            MountingMode::Ergonomic => "Height = EL",
        }
    }

    /// The centre height formula with the inputs substituted.
    pub fn substituted(&self) -> String {
        let el = self.inputs.eye_level_cm;
        let center = self.result.tv_center_height_cm;
        match self.inputs.mounting_mode {
            MountingMode::Reclined => format!(
                "{el:.1} + ({:.1} * {VERTICAL_FACTOR}) = {center:.1} cm",
                self.result.distance_cm()
            ),
            MountingMode::Ergonomic => format!("{el:.1} = {center:.1} cm"),
        }
    }
}

impl fmt::Display for Breakdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "1. Variables")?;
        writeln!(f, "- Eye Level (EL): {:.1} cm", self.inputs.eye_level_cm)?;
        writeln!(f, "- Viewing Distance (VD): {:.1} cm", result.distance_cm())?;
        writeln!(f, "- Distance strategy: {}", self.inputs.strategy)?;
        if self.inputs.mounting_mode == MountingMode::Reclined {
            writeln!(f, "- Vertical Factor: {VERTICAL_FACTOR} (coefficient for comfortable viewing angle)")?;
        }
        writeln!(f, "- Screen: {:.1} × {:.1} cm", result.screen.width_cm(), result.screen.height_cm())?;
        writeln!(f)?;
        writeln!(f, "2. The Math")?;
        writeln!(f, "{}", self.formula())?;
        writeln!(f, "{}", self.substituted())?;
        writeln!(
            f,
            "Bottom = {:.1} - ({:.1} / 2) = {:.1} cm",
            result.tv_center_height_cm,
            result.screen.height_cm(),
            result.tv_bottom_height_cm
        )?;
        write!(
            f,
            "Angles: {:.1}° vertical, {:.1}° horizontal",
            result.vertical_angle_deg, result.horizontal_angle_deg
        )
    }
}
