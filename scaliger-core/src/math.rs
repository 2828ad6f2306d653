//! Numeric helpers shared by the calendar, nutation and sidereal code.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`truncate`] | integer part, rounded toward zero |
//! | [`fraction`] | signed fractional part |
//! | [`reduce_hours`] | `[0, 24)` |
//! | [`reduce_degrees`] | `[0, 360)` |
//! | [`reduce_radians`] | `[0, 2π)` |
//! | [`frac360`] | `(0, 720)`, see the function docs |
//! | [`polynomial`] | `c₀ + c₁t + c₂t² + …` |
//!
//! # Example
//!
//! ```
//! use scaliger_core::math::{polynomial, reduce_hours, truncate};
//!
//! assert_eq!(truncate(-1.5), -1.0);
//! assert_eq!(reduce_hours(-0.5), 23.5);
//! assert_eq!(polynomial(10.0, &[1.0, 2.0, 3.0]), 321.0);
//! ```

use crate::constants::{DEG_TO_RAD, HOURS_PER_DAY, RAD_TO_DEG, TWOPI};

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Integer part of `x`, truncating toward zero.
///
/// `truncate(1.5) == 1.0`, `truncate(-1.5) == -1.0`.
#[inline]
pub fn truncate(x: f64) -> f64 {
    if x < 0.0 {
        x.ceil()
    } else {
        x.floor()
    }
}

/// Fractional part of `x`, keeping the sign of `x`.
///
/// `fraction(-5.5) == -0.5`.
#[inline]
pub fn fraction(x: f64) -> f64 {
    x - truncate(x)
}

/// Wraps `value` into `[0, range)`.
#[inline]
fn reduce(value: f64, range: f64) -> f64 {
    let mut x = fmod(value, range);
    if x < 0.0 {
        x += range;
    }
    // A tiny negative remainder can round up to `range` itself.
    if x >= range {
        x = 0.0;
    }
    x
}

/// Reduces hours to `[0, 24)`.
#[inline]
pub fn reduce_hours(hours: f64) -> f64 {
    reduce(hours, HOURS_PER_DAY)
}

/// Reduces arc-degrees to `[0, 360)`.
#[inline]
pub fn reduce_degrees(degrees: f64) -> f64 {
    reduce(degrees, 360.0)
}

/// Reduces radians to `[0, 2π)`.
#[inline]
pub fn reduce_radians(radians: f64) -> f64 {
    reduce(radians, TWOPI)
}

/// Evaluates `coeffs[0] + coeffs[1]*t + coeffs[2]*t² + …` with Horner's scheme.
///
/// An empty coefficient list evaluates to zero.
#[inline]
pub fn polynomial(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Fractional revolutions expressed in degrees, for the low-precision
/// fundamental argument series.
///
/// `fraction(x) * 360` lies in `(-360, 360)`; the result is shifted up by a
/// single `+360`, so it lands in `(0, 720)` rather than `[0, 360)`. Callers only
/// take sines and cosines of the result.
#[inline]
pub fn frac360(x: f64) -> f64 {
    let mut f = fraction(x) * 360.0;
    if f < 360.0 {
        f += 360.0;
    }
    f
}

/// Absolute-difference comparison: `|a - b| <= tolerance`.
#[inline]
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
