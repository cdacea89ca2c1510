// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used when comparing derived quantities.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `TVMOUNT_TOLERANCE` (e.g. `TVMOUNT_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Returns the current tolerance value.
/// If not set yet, it tries `TVMOUNT_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a precision-dependent default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("TVMOUNT_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `tvmount::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// `true` when `a` and `b` differ by no more than [`tolerance`].
#[inline]
pub fn approx_eq(a: Real, b: Real) -> bool {
    (a - b).abs() <= tolerance()
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Centimetres per inch.
pub const CM_PER_INCH: Real = 2.54;
/// Centimetres per metre.
pub const CM_PER_METER: Real = 100.0;

#[inline]
pub const fn inch_to_cm(inch: Real) -> Real {
    inch * CM_PER_INCH
}

#[inline]
pub const fn cm_to_m(cm: Real) -> Real {
    cm / CM_PER_METER
}

#[inline]
pub const fn m_to_cm(m: Real) -> Real {
    m * CM_PER_METER
}

#[inline]
pub const fn inch_to_m(inch: Real) -> Real {
    cm_to_m(inch_to_cm(inch))
}
