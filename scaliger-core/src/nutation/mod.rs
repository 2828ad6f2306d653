//! Nutation in ecliptic longitude and in obliquity.
//!
//! Nutation is the short-period wobble of Earth's rotation axis about its mean
//! position, dominated by an 18.6-year term driven by the regression of the
//! Moon's node. This module evaluates a truncated series (13 longitude terms,
//! 9 obliquity terms) after P. Duffett-Smith, *Astronomy with Your Personal
//! Computer*, good to about 1 arcsecond.
//!
//! # Output
//!
//! [`NutationResult`] holds both components in **degrees**:
//! - `delta_psi`: nutation in longitude (Δψ)
//! - `delta_eps`: nutation in obliquity (Δε)
//!
//! # Example
//!
//! ```
//! use scaliger_core::nutation::nutation;
//!
//! let n = nutation(2451544.5); // 2000 Jan 1.0
//! assert!((n.delta_psi - -0.003877).abs() < 1e-4);
//! assert!((n.delta_eps - -0.001599).abs() < 1e-4);
//! ```

mod fundamental_args;

pub use fundamental_args::FundamentalArgs;

use crate::constants::{ARCSEC_PER_DEGREE, DAYS_PER_JULIAN_CENTURY, J1900_JD};
use crate::math::deg_to_rad;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutationResult {
    /// Nutation in longitude, degrees.
    pub delta_psi: f64,
    /// Nutation in obliquity, degrees.
    pub delta_eps: f64,
}

impl NutationResult {
    pub fn new(delta_psi: f64, delta_eps: f64) -> Self {
        Self {
            delta_psi,
            delta_eps,
        }
    }

    pub fn delta_psi_arcsec(&self) -> f64 {
        self.delta_psi * ARCSEC_PER_DEGREE
    }

    pub fn delta_eps_arcsec(&self) -> f64 {
        self.delta_eps * ARCSEC_PER_DEGREE
    }
}

impl From<NutationResult> for (f64, f64) {
    fn from(n: NutationResult) -> Self {
        (n.delta_psi, n.delta_eps)
    }
}

/// Nutation in longitude and obliquity at Julian Day `jd`, in degrees.
///
/// Defined for any finite `jd`.
pub fn nutation(jd: f64) -> NutationResult {
    let t = (jd - J1900_JD) / DAYS_PER_JULIAN_CENTURY;
    let args = FundamentalArgs::at(t);

    let ms = deg_to_rad(args.sun_anomaly);
    let md = deg_to_rad(args.moon_anomaly);
    let nm = deg_to_rad(args.moon_node);
    let tls = deg_to_rad(2.0 * args.sun_longitude);
    let tld = deg_to_rad(2.0 * args.moon_longitude);
    let tnm = 2.0 * nm;

    let dpsi = (-17.2327 - 1.737e-2 * t) * nm.sin() + (-1.2729 - 1.3e-4 * t) * tls.sin()
        + 2.088e-1 * tnm.sin()
        - 2.037e-1 * tld.sin()
        + (1.261e-1 - 3.1e-4 * t) * ms.sin()
        + 6.75e-2 * md.sin()
        - (4.97e-2 - 1.2e-4 * t) * (tls + ms).sin()
        - 3.42e-2 * (tld - nm).sin()
        - 2.61e-2 * (tld + md).sin()
        + 2.14e-2 * (tls - ms).sin()
        - 1.49e-2 * (tls - tld + md).sin()
        + 1.24e-2 * (tls - nm).sin()
        + 1.14e-2 * (tld - md).sin();

    let deps = (9.21 + 9.1e-4 * t) * nm.cos() + (5.522e-1 - 2.9e-4 * t) * tls.cos()
        - 9.04e-2 * tnm.cos()
        + 8.84e-2 * tld.cos()
        + 2.16e-2 * (tls + ms).cos()
        + 1.83e-2 * (tld - nm).cos()
        + 1.13e-2 * (tld + md).cos()
        - 9.3e-3 * (tls - ms).cos()
        - 6.6e-3 * (tls - nm).cos();

    NutationResult::new(dpsi / ARCSEC_PER_DEGREE, deps / ARCSEC_PER_DEGREE)
}
