//! Horizontal viewing angle actually achieved at a given distance.

use crate::errors::GeometryError;
use crate::float_types::Real;

/// Angle subtended by a screen `screen_width_cm` wide at `distance_cm`, in degrees.
///
/// ```text
/// θ = 2 · atan((w / 2) / d)
/// ```
///
/// Returns [`GeometryError::NonPositiveDistance`] unless `distance_cm` is
/// positive and finite.
pub fn actual_horizontal_angle(screen_width_cm: Real, distance_cm: Real) -> Result<Real, GeometryError> {
    if !(distance_cm.is_finite() && distance_cm > 0.0) {
        return Err(GeometryError::NonPositiveDistance(distance_cm));
    }
    Ok((2.0 * ((screen_width_cm / 2.0) / distance_cm).atan()).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_equal_to_twice_distance_is_ninety_degrees() {
        let angle = actual_horizontal_angle(200.0, 100.0).unwrap();
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_zero_and_nan() {
        assert_eq!(
            actual_horizontal_angle(100.0, 0.0),
            Err(GeometryError::NonPositiveDistance(0.0))
        );
        assert!(actual_horizontal_angle(100.0, Real::NAN).is_err());
    }
}
