use scaliger_core::{nutation, true_obliquity};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects which sidereal time [`julian_to_sidereal`](super::julian_to_sidereal)
/// computes.
///
/// - `longitude` present → local, absent → Greenwich.
/// - `obliquity` and `nutation_longitude` both present → apparent, otherwise mean.
///
/// The two choices are independent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealOptions {
    /// Geographic longitude in degrees, negative westwards.
    pub longitude: Option<f64>,
    /// Obliquity of the ecliptic in degrees.
    pub obliquity: Option<f64>,
    /// Nutation in longitude (Δψ) in degrees.
    pub nutation_longitude: Option<f64>,
}

impl SiderealOptions {
    /// Greenwich mean sidereal time.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn with_nutation(mut self, obliquity: f64, nutation_longitude: f64) -> Self {
        self.obliquity = Some(obliquity);
        self.nutation_longitude = Some(nutation_longitude);
        self
    }

    /// Fills obliquity (true) and nutation in longitude for `jd`, selecting
    /// apparent sidereal time.
    pub fn apparent_at(self, jd: f64) -> Self {
        let n = nutation(jd);
        self.with_nutation(true_obliquity(jd, n.delta_eps), n.delta_psi)
    }

    pub fn is_local(&self) -> bool {
        self.longitude.is_some()
    }

    pub fn is_apparent(&self) -> bool {
        self.obliquity.is_some() && self.nutation_longitude.is_some()
    }

    pub fn kind(&self) -> SiderealKind {
        match (self.is_local(), self.is_apparent()) {
            (false, false) => SiderealKind::GreenwichMean,
            (false, true) => SiderealKind::GreenwichApparent,
            (true, false) => SiderealKind::LocalMean,
            (true, true) => SiderealKind::LocalApparent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SiderealKind {
    GreenwichMean,
    GreenwichApparent,
    LocalMean,
    LocalApparent,
}

impl SiderealKind {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::GreenwichMean => "GMST",
            Self::GreenwichApparent => "GAST",
            Self::LocalMean => "LMST",
            Self::LocalApparent => "LAST",
        }
    }
}

impl fmt::Display for SiderealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
