//! Input validation errors

use crate::float_types::Real;

/// Everything that can go wrong in a viewing geometry computation.
///
/// All variants belong to the single *invalid input* class: the caller passed
/// a value the formulas are not defined for. Nothing here is retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (NonPositiveDistance) A zero, negative or non-finite viewing distance reached a division
    #[error("(NonPositiveDistance) Viewing distance must be positive and finite, got {0}")]
    NonPositiveDistance(Real),
    /// (OutOfRange) A measurement lies outside its accepted range
    #[error("(OutOfRange) {field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: Real,
        min: Real,
        max: Real,
    },
    /// (UnsupportedFieldOfView) Only the SMPTE, THX and cinema-limit angles are offered
    #[error("(UnsupportedFieldOfView) {0}° is not one of 30, 36 or 40")]
    UnsupportedFieldOfView(Real),
    /// (UnknownFieldOfView) Text that names neither a standard nor an angle
    #[error("(UnknownFieldOfView) '{0}' is not a field of view (expected 30, 36, 40, smpte, thx or cinema)")]
    UnknownFieldOfView(String),
    /// (UnknownMountingMode) Text that names no mounting mode
    #[error("(UnknownMountingMode) '{0}' is not a mounting mode (expected ergonomic or reclined)")]
    UnknownMountingMode(String),
}

impl GeometryError {
    /// Every variant is an invalid-input condition.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GeometryError::NonPositiveDistance(_)
                | GeometryError::OutOfRange { .. }
                | GeometryError::UnsupportedFieldOfView(_)
                | GeometryError::UnknownFieldOfView(_)
                | GeometryError::UnknownMountingMode(_)
        )
    }
}
