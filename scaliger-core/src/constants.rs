/// Julian Day of 1900 January 0.5 (noon), the epoch of the Newcomb-era series.
pub const J1900_JD: f64 = 2415020.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Last Julian Day number (integer part of `JD + 0.5`) still on the Julian calendar.
pub const GREGORIAN_START_JD: f64 = 2299160.0;

/// Julian Day of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Ratio of a mean sidereal day rate to a mean solar day rate.
#[allow(clippy::excessive_precision)]
pub const SOLAR_TO_SIDEREAL: f64 = 1.002737909350795;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Degrees of rotation per hour of sidereal time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
