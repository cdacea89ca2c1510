//! One-shot viewing geometry calculation.
//!
//! [`calculate`] takes a [`ViewingInputs`] record, checks it against the
//! standard [`InputLimits`], and derives every output quantity in one pass.
//! Nothing is cached between calls; the mounting mode and distance strategy
//! travel with the inputs.

use crate::angles::actual_horizontal_angle;
use crate::config::{Defaults, InputLimits, Range};
use crate::distance::DistanceStrategy;
use crate::errors::GeometryError;
use crate::float_types::{Real, m_to_cm};
use crate::mounting::{MountingHeight, MountingMode, mounting_height};
use crate::screen::Screen;
use tracing::debug;

/// Measurements and choices gathered from the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewingInputs {
    pub tv_size_inch: u32,
    pub eye_level_cm: Real,
    pub strategy: DistanceStrategy,
    /// Overrides the recommended distance when set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub manual_distance_m: Option<Real>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mounting_mode: MountingMode,
}

impl ViewingInputs {
    /// Standard-default size and eye level with the given strategy, ergonomic
    /// mounting and no manual distance.
    pub fn new(strategy: DistanceStrategy) -> Self {
        let defaults = Defaults::STANDARD;
        Self {
            tv_size_inch: defaults.tv_size_inch,
            eye_level_cm: defaults.eye_level_cm,
            strategy,
            manual_distance_m: None,
            mounting_mode: MountingMode::default(),
        }
    }

    pub const fn with_tv_size(mut self, tv_size_inch: u32) -> Self {
        self.tv_size_inch = tv_size_inch;
        self
    }

    pub const fn with_eye_level(mut self, eye_level_cm: Real) -> Self {
        self.eye_level_cm = eye_level_cm;
        self
    }

    pub const fn with_manual_distance(mut self, manual_distance_m: Option<Real>) -> Self {
        self.manual_distance_m = manual_distance_m;
        self
    }

    pub const fn with_mounting_mode(mut self, mounting_mode: MountingMode) -> Self {
        self.mounting_mode = mounting_mode;
        self
    }

    pub const fn screen(&self) -> Screen {
        Screen::new(self.tv_size_inch)
    }

    /// Rejects the first measurement that falls outside `limits`.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), GeometryError> {
        check("tv_size_inch", self.tv_size_inch as Real, &limits.tv_size_inch)?;
        check("eye_level_cm", self.eye_level_cm, &limits.eye_level_cm)?;
        if let Some(distance_m) = self.manual_distance_m {
            check("manual_distance_m", distance_m, &limits.manual_distance_m)?;
        }
        Ok(())
    }

    /// Copy with every measurement pinned into `limits`, the way a bounded
    /// number input would.
    pub fn clamped(&self, limits: &InputLimits) -> Self {
        Self {
            tv_size_inch: limits.tv_size_inch.clamp(self.tv_size_inch as Real).round() as u32,
            eye_level_cm: limits.eye_level_cm.clamp(self.eye_level_cm),
            manual_distance_m: self.manual_distance_m.map(|d| limits.manual_distance_m.clamp(d)),
            ..*self
        }
    }
}

fn check(field: &'static str, value: Real, range: &Range) -> Result<(), GeometryError> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(GeometryError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

/// Where the final viewing distance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DistanceSource {
    Recommended,
    Manual,
}

impl DistanceSource {
    pub const fn label(self) -> &'static str {
        match self {
            DistanceSource::Recommended => "Recommended Distance",
            DistanceSource::Manual => "Your Distance",
        }
    }
}

/// Everything derived from one [`ViewingInputs`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewingResult {
    pub screen: Screen,
    /// Final viewing distance, metres.
    pub distance_m: Real,
    /// What the selected strategy recommends, even when overridden.
    pub recommended_distance_m: Real,
    pub distance_source: DistanceSource,
    pub tv_center_height_cm: Real,
    pub tv_bottom_height_cm: Real,
    pub vertical_angle_deg: Real,
    pub horizontal_angle_deg: Real,
}

impl ViewingResult {
    pub fn distance_cm(&self) -> Real {
        m_to_cm(self.distance_m)
    }

    pub fn tv_top_height_cm(&self) -> Real {
        self.tv_bottom_height_cm + self.screen.height_cm()
    }

    pub const fn mounting(&self) -> MountingHeight {
        MountingHeight {
            center_cm: self.tv_center_height_cm,
            bottom_cm: self.tv_bottom_height_cm,
            vertical_angle_deg: self.vertical_angle_deg,
        }
    }
}

/// Validates `inputs` against [`InputLimits::STANDARD`] and computes the result.
pub fn calculate(inputs: &ViewingInputs) -> Result<ViewingResult, GeometryError> {
    inputs.validate(&InputLimits::STANDARD)?;
    calculate_unchecked(inputs)
}

/// Computes the result without range checks.
///
/// Still fails with [`GeometryError::NonPositiveDistance`] if a manual
/// distance is zero, negative or non-finite.
pub fn calculate_unchecked(inputs: &ViewingInputs) -> Result<ViewingResult, GeometryError> {
    let screen = inputs.screen();
    let recommended_distance_m = inputs.strategy.distance_m(&screen);

    let (distance_m, distance_source) = match inputs.manual_distance_m {
        Some(manual) => (manual, DistanceSource::Manual),
        None => (recommended_distance_m, DistanceSource::Recommended),
    };
    let distance_cm = m_to_cm(distance_m);

    let horizontal_angle_deg = actual_horizontal_angle(screen.width_cm(), distance_cm)?;
    let height = mounting_height(inputs.eye_level_cm, distance_cm, &screen, inputs.mounting_mode);

    debug!(
        tv_size_inch = inputs.tv_size_inch,
        strategy = %inputs.strategy,
        mode = %inputs.mounting_mode,
        distance_m,
        center_cm = height.center_cm,
        horizontal_angle_deg,
        "calculated viewing geometry"
    );

    Ok(ViewingResult {
        screen,
        distance_m,
        recommended_distance_m,
        distance_source,
        tv_center_height_cm: height.center_cm,
        tv_bottom_height_cm: height.bottom_cm,
        vertical_angle_deg: height.vertical_angle_deg,
        horizontal_angle_deg,
    })
}
