//! Obliquity of the ecliptic.
//!
//! The obliquity is the angle between Earth's equatorial plane and the ecliptic.
//! [`mean_obliquity`] gives the smoothly varying value from a cubic in Julian
//! centuries since 1900 January 0.5; [`true_obliquity`] adds the nutation in
//! obliquity on top of it.
//!
//! # Example
//!
//! ```
//! use scaliger_core::nutation::nutation;
//! use scaliger_core::obliquity::{mean_obliquity, true_obliquity};
//!
//! let jd = 2451544.5; // 2000 Jan 1.0
//! let eps0 = mean_obliquity(jd);
//! assert!((eps0 - 23.439278).abs() < 1e-4);
//!
//! let eps = true_obliquity(jd, nutation(jd).delta_eps);
//! assert!((eps - eps0).abs() < 0.01);
//! ```

use crate::constants::{ARCSEC_PER_DEGREE, DAYS_PER_JULIAN_CENTURY, J1900_JD};

/// Mean obliquity of the ecliptic in degrees.
///
/// 23°27′08.26″ at 1900 January 0.5, decreasing by about 46.8″ per century.
pub fn mean_obliquity(jd: f64) -> f64 {
    let t = (jd - J1900_JD) / DAYS_PER_JULIAN_CENTURY;
    let c = ((-0.00181 * t + 0.0059) * t + 46.845) * t;
    23.45229444 - c / ARCSEC_PER_DEGREE
}

/// True obliquity of the ecliptic in degrees, given the nutation in obliquity
/// `delta_eps` in degrees.
pub fn true_obliquity(jd: f64, delta_eps: f64) -> f64 {
    mean_obliquity(jd) + delta_eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_almost_eq;

    #[test]
    fn test_mean_obliquity_2000() {
        assert_almost_eq!(mean_obliquity(2451544.5), 23.43927777777778, 1e-4);
    }

    #[test]
    fn test_mean_obliquity_1979() {
        // 1979-09-24.0
        assert_almost_eq!(mean_obliquity(2444140.5), 23.441916666666668, 1e-4);
    }

    #[test]
    fn test_mean_obliquity_at_epoch() {
        assert_eq!(mean_obliquity(J1900_JD), 23.45229444);
    }

    #[test]
    fn test_mean_obliquity_decreases() {
        assert!(mean_obliquity(2451544.5) < mean_obliquity(2415020.0));
        assert!(mean_obliquity(2488069.5) < mean_obliquity(2451544.5));
    }

    #[test]
    fn test_true_obliquity_adds_nutation() {
        let jd = 2446895.5;
        let deps = 0.0026;
        assert_eq!(true_obliquity(jd, deps), mean_obliquity(jd) + deps);
        assert_eq!(true_obliquity(jd, 0.0), mean_obliquity(jd));
    }
}
