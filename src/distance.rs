//! Recommended viewing distance.
//!
//! Two strategies are in use for TV seating distance and neither is a universal
//! default, so both are modelled as variants of [`DistanceStrategy`] and the
//! caller always picks one:
//!
//! - **Field of view**: sit where the screen width subtends a target horizontal
//!   angle.
//!   ```text
//!   d = (w / 2) / tan(θ / 2)
//!   ```
//! - **Diagonal heuristic**: sit 1.67 × the diagonal away.

use crate::errors::GeometryError;
use crate::float_types::{Real, inch_to_m};
use crate::screen::Screen;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Distance multiplier applied to the diagonal by the legacy heuristic.
pub const DIAGONAL_FACTOR: Real = 1.67;

/// Horizontal field-of-view targets offered to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FieldOfView {
    /// SMPTE recommendation, 30°.
    Smpte,
    /// THX recommendation, 36°.
    Thx,
    /// Upper cinema limit, 40°.
    CinemaLimit,
}

impl FieldOfView {
    pub const ALL: [FieldOfView; 3] = [FieldOfView::Smpte, FieldOfView::Thx, FieldOfView::CinemaLimit];

    pub const fn degrees(self) -> Real {
        match self {
            FieldOfView::Smpte => 30.0,
            FieldOfView::Thx => 36.0,
            FieldOfView::CinemaLimit => 40.0,
        }
    }

    /// Maps an angle in degrees back to a standard, if it names one.
    pub fn from_degrees(degrees: Real) -> Result<Self, GeometryError> {
        Self::ALL
            .into_iter()
            .find(|fov| (fov.degrees() - degrees).abs() < 1e-6)
            .ok_or(GeometryError::UnsupportedFieldOfView(degrees))
    }
}

impl fmt::Display for FieldOfView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldOfView::Smpte => "SMPTE",
            FieldOfView::Thx => "THX",
            FieldOfView::CinemaLimit => "cinema limit",
        };
        write!(f, "{}° ({name})", self.degrees())
    }
}

impl FromStr for FieldOfView {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('°');
        match trimmed.to_ascii_lowercase().as_str() {
            "smpte" => Ok(FieldOfView::Smpte),
            "thx" => Ok(FieldOfView::Thx),
            "cinema" | "cinema-limit" => Ok(FieldOfView::CinemaLimit),
            other => {
                let degrees = other
                    .parse::<Real>()
                    .map_err(|_| GeometryError::UnknownFieldOfView(s.trim().to_string()))?;
                Self::from_degrees(degrees)
            },
        }
    }
}

/// How the recommended seating distance is derived from the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DistanceStrategy {
    /// Sit where the screen width fills the given horizontal angle.
    FieldOfView(FieldOfView),
    /// Sit [`DIAGONAL_FACTOR`] × the diagonal away.
    DiagonalHeuristic,
}

impl DistanceStrategy {
    /// Recommended distance in inches for `screen`.
    pub fn distance_inch(&self, screen: &Screen) -> Real {
        match self {
            DistanceStrategy::FieldOfView(fov) => {
                let half_angle = (fov.degrees() / 2.0).to_radians();
                (screen.width_inch() / 2.0) / half_angle.tan()
            },
            DistanceStrategy::DiagonalHeuristic => screen.diagonal() * DIAGONAL_FACTOR,
        }
    }

    /// Recommended distance in metres for `screen`.
    pub fn distance_m(&self, screen: &Screen) -> Real {
        let distance_m = inch_to_m(self.distance_inch(screen));
        trace!(strategy = ?self, diagonal = screen.diagonal_inch, distance_m, "recommended distance");
        distance_m
    }
}

impl fmt::Display for DistanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceStrategy::FieldOfView(fov) => write!(f, "field of view {fov}"),
            DistanceStrategy::DiagonalHeuristic => write!(f, "diagonal × {DIAGONAL_FACTOR}"),
        }
    }
}

impl FromStr for DistanceStrategy {
    type Err = GeometryError;

    /// Accepts `heuristic`/`diagonal` or anything [`FieldOfView`] parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" | "diagonal" => Ok(DistanceStrategy::DiagonalHeuristic),
            other => other.parse().map(DistanceStrategy::FieldOfView),
        }
    }
}

/// Recommended viewing distance in metres for a `tv_size_inch` diagonal
/// at a horizontal field of view of `fov`.
pub fn recommended_distance(tv_size_inch: u32, fov: FieldOfView) -> Real {
    DistanceStrategy::FieldOfView(fov).distance_m(&Screen::new(tv_size_inch))
}

/// Recommended viewing distance in metres using the diagonal heuristic.
pub fn heuristic_distance(tv_size_inch: u32) -> Real {
    DistanceStrategy::DiagonalHeuristic.distance_m(&Screen::new(tv_size_inch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_degrees() {
        assert_eq!("36".parse::<FieldOfView>(), Ok(FieldOfView::Thx));
        assert_eq!("40°".parse::<FieldOfView>(), Ok(FieldOfView::CinemaLimit));
        assert_eq!("SMPTE".parse::<FieldOfView>(), Ok(FieldOfView::Smpte));
        assert_eq!(
            "heuristic".parse::<DistanceStrategy>(),
            Ok(DistanceStrategy::DiagonalHeuristic)
        );
    }

    #[test]
    fn rejects_unlisted_angle() {
        assert_eq!(
            "45".parse::<FieldOfView>(),
            Err(GeometryError::UnsupportedFieldOfView(45.0))
        );
        assert_eq!(
            "wide".parse::<FieldOfView>(),
            Err(GeometryError::UnknownFieldOfView("wide".to_string()))
        );
        assert_eq!(
            "Wide".parse::<DistanceStrategy>().unwrap_err().to_string(),
            "(UnknownFieldOfView) 'wide' is not a field of view (expected 30, 36, 40, smpte, thx or cinema)"
        );
    }
}
