//! Sidereal time from a Julian Day.
//!
//! Mean Greenwich sidereal time comes from a cubic in Julian centuries since
//! 2000 January 0.5 plus the elapsed UT scaled to sidereal rate (Duffett-Smith).
//! [`SiderealOptions`] adds the equation of the equinoxes (apparent time)
//! and/or the observer's longitude (local time).
//!
//! ```
//! use scaliger_time::{julian_to_sidereal, SiderealKind, SiderealOptions};
//!
//! let jd = 2455235.47917; // 2010 Feb 7, 23h30m UT
//! let options = SiderealOptions::new().apparent_at(jd).with_longitude(-75.0);
//! assert_eq!(options.kind(), SiderealKind::LocalApparent);
//!
//! let last = julian_to_sidereal(jd, &options);
//! assert!((last - 3.6985).abs() < 1e-3);
//! ```

mod gmst;
mod options;

pub use gmst::{civil_to_sidereal, equation_of_equinoxes, julian_to_sidereal, mean_gmst};
pub use options::{SiderealKind, SiderealOptions};
